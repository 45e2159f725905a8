use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub avatar_url: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersDto {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SingleUserDto {
    pub user: UserDto,
}
