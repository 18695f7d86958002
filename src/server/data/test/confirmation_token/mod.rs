use crate::server::data::confirmation_token::ConfirmationTokenRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
