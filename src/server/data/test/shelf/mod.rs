use crate::server::{data::shelf::ShelfRepository, error::AppError, model::book::Shelf};
use test_utils::{builder::TestBuilder, factory};

mod add;
