//! Forum topic repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::topic::{CreateTopicParam, Topic};

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a topic stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The created topic
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown author id)
    pub async fn create(&self, param: CreateTopicParam) -> Result<Topic, DbErr> {
        let entity = entity::topic::ActiveModel {
            title: ActiveValue::Set(param.title),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Topic::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Topic>, DbErr> {
        let entity = entity::prelude::Topic::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Topic::from_entity))
    }

    /// Gets all topics, most recently created first (ties by id descending).
    pub async fn get_all(&self) -> Result<Vec<Topic>, DbErr> {
        let entities = entity::prelude::Topic::find()
            .order_by_desc(entity::topic::Column::CreatedAt)
            .order_by_desc(entity::topic::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Topic::from_entity).collect())
    }
}
