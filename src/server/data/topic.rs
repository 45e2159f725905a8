use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::topic::Topic;

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every topic ordered by slug
    pub async fn get_all(&self) -> Result<Vec<Topic>, DbErr> {
        let topics = entity::prelude::Topic::find()
            .order_by_asc(entity::topic::Column::Slug)
            .all(self.db)
            .await?;

        Ok(topics.into_iter().map(Topic::from_entity).collect())
    }
}
