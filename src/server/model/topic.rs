//! Forum topic domain models.

use chrono::{DateTime, Utc};

use crate::model::forum::{CreateTopicDto, TopicDto};

/// Forum thread that comments attach to.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            id: self.id,
            title: self.title,
            author_id: self.author_id,
            creation_time: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::topic::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author_id: entity.author_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for opening a new topic.
#[derive(Debug, Clone)]
pub struct CreateTopicParam {
    pub title: String,
    pub author_id: Option<i32>,
}

impl CreateTopicParam {
    pub fn from_dto(dto: CreateTopicDto) -> Self {
        Self {
            title: dto.title,
            author_id: dto.author_id,
        }
    }
}
