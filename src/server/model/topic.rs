//! Topic domain model.

use crate::model::topic::TopicDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

impl Topic {
    pub fn from_entity(entity: entity::topic::Model) -> Self {
        Self {
            slug: entity.slug,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            slug: self.slug,
            description: self.description,
        }
    }
}
