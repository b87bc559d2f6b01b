use crate::db::DbPool;
use crate::errors::AppError;

use super::types::{NewParticipant, Participant};

const SELECT_PARTICIPANT: &str =
    "SELECT id, name, email, contact, usn, college, created_at, updated_at FROM participants";

/// Create a participant and its event registrations in one transaction.
pub async fn register(
    pool: &DbPool,
    new: &NewParticipant,
    event_ids: &[i64],
) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO participants (name, email, contact, password, usn, college) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.contact)
    .bind(&new.password)
    .bind(&new.usn)
    .bind(&new.college)
    .execute(&mut *tx)
    .await?;
    let participant_id = result.last_insert_rowid();

    for &event_id in event_ids {
        sqlx::query("INSERT INTO participant_events (participant_id, event_id) VALUES (?, ?)")
            .bind(participant_id)
            .bind(event_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(participant_id)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Participant>, AppError> {
    let participant = sqlx::query_as::<_, Participant>(&format!("{SELECT_PARTICIPANT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(participant)
}

/// Find by email — used for the duplicate-registration check.
pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Participant>, AppError> {
    let participant =
        sqlx::query_as::<_, Participant>(&format!("{SELECT_PARTICIPANT} WHERE email = ?"))
            .bind(email)
            .fetch_optional(pool)
            .await?;
    Ok(participant)
}

/// Event ids a participant is registered for.
pub async fn event_ids_for(pool: &DbPool, participant_id: i64) -> Result<Vec<i64>, AppError> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT event_id FROM participant_events WHERE participant_id = ? ORDER BY event_id",
    )
    .bind(participant_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Password hash for a participant — authentication path only.
pub async fn password_hash_by_email(pool: &DbPool, email: &str) -> Result<Option<String>, AppError> {
    let hash = sqlx::query_scalar::<_, String>("SELECT password FROM participants WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(hash)
}
