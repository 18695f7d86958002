//! Forum topic service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{topic::TopicRepository, user::UserRepository},
    error::AppError,
    model::topic::{CreateTopicParam, Topic},
};

pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new topic.
    ///
    /// # Arguments
    /// - `param` - Title and optional author of the topic
    ///
    /// # Returns
    /// - `Ok(Topic)` - The created topic
    /// - `Err(AppError::BadRequest)` - Blank title
    /// - `Err(AppError::NotFound)` - The given author does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_topic(&self, mut param: CreateTopicParam) -> Result<Topic, AppError> {
        param.title = param.title.trim().to_string();
        if param.title.is_empty() {
            return Err(AppError::BadRequest("Topic title must not be blank".to_string()));
        }

        if let Some(author_id) = param.author_id {
            if UserRepository::new(self.db)
                .find_by_id(author_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("User not found".to_string()));
            }
        }

        Ok(TopicRepository::new(self.db).create(param).await?)
    }

    /// Lists all topics, newest first.
    pub async fn get_all_topics(&self) -> Result<Vec<Topic>, AppError> {
        Ok(TopicRepository::new(self.db).get_all().await?)
    }

    /// Fetches a topic by id.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The topic
    /// - `Err(AppError::NotFound)` - No topic with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Topic, AppError> {
        TopicRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))
    }
}
