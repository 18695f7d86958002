use crate::server::{data::topic::TopicRepository, model::topic::CreateTopicParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
