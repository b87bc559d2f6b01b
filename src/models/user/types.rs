use serde::{Deserialize, Serialize};

/// Internal organizer account — includes password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
    pub updated_at: String,
}

/// New account data for creation. `password` is already hashed.
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Account on the wire — no password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for ApiUserResponse {
    fn from(u: User) -> Self {
        ApiUserResponse {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
        }
    }
}
