use crate::server::{data::user::UserRepository, model::user::RegisterUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod find_by_email;
mod set_enabled;
