use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_username(username).await?)
    }
}
