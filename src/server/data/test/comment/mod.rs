use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::comment::{CommentStatus, CreateCommentParam},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_topic;
mod transition_status;
mod update_status;
