use crate::server::{data::book::BookRepository, model::book::Book};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_external_id;
mod get_by_author;
mod get_featured;
mod get_first_page;
