//! User domain model.

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub avatar_url: String,
    pub name: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            avatar_url: entity.avatar_url,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            avatar_url: self.avatar_url,
            name: self.name,
        }
    }
}
