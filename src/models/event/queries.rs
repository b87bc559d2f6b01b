use crate::db::DbPool;
use crate::errors::AppError;

use super::types::Event;

const SELECT_EVENT: &str =
    "SELECT id, title, description, date, created_at, updated_at FROM events";

/// All events in creation order.
pub async fn find_all(pool: &DbPool) -> Result<Vec<Event>, AppError> {
    let events = sqlx::query_as::<_, Event>(&format!("{SELECT_EVENT} ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(events)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Event>, AppError> {
    let event = sqlx::query_as::<_, Event>(&format!("{SELECT_EVENT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(event)
}

/// Create a new event, returning its id.
pub async fn create(
    pool: &DbPool,
    title: &str,
    description: &str,
    date: Option<&str>,
) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO events (title, description, date) VALUES (?, ?, ?)")
        .bind(title)
        .bind(description)
        .bind(date)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &DbPool,
    id: i64,
    title: &str,
    description: &str,
    date: Option<&str>,
) -> Result<(), AppError> {
    sqlx::query(
        "UPDATE events SET title = ?, description = ?, date = ?, updated_at = datetime('now') \
         WHERE id = ?",
    )
    .bind(title)
    .bind(description)
    .bind(date)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
