use crate::db::DbPool;
use crate::errors::AppError;

use super::types::{NewUser, User};

const SELECT_USER: &str =
    "SELECT id, username, email, password, created_at, updated_at FROM users";

/// Create a new account, returning its id.
pub async fn create(pool: &DbPool, new: &NewUser) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO users (username, email, password) VALUES (?, ?, ?)")
        .bind(&new.username)
        .bind(&new.email)
        .bind(&new.password)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Find an account by username for authentication.
pub async fn find_by_username(pool: &DbPool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}
