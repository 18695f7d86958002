use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicDto {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub creation_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicDto {
    pub title: String,
    #[serde(default)]
    pub author_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub creation_time: DateTime<Utc>,
    pub comment_message: String,
    pub author_id: i32,
    /// Nickname of the author.
    pub author_name: String,
    pub topic_id: i32,
    /// One of `UNVERIFIED`, `REPORTED`, `VERIFIED`.
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub topic_id: i32,
    pub comment_message: String,
    pub author_id: i32,
}
