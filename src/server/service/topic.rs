use sea_orm::DatabaseConnection;

use crate::server::{data::topic::TopicRepository, error::AppError, model::topic::Topic};

pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all topics
    pub async fn get_all(&self) -> Result<Vec<Topic>, AppError> {
        let repo = TopicRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
