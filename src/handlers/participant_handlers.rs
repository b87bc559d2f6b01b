use actix_web::{HttpResponse, web};

use crate::auth::{password, validate};
use crate::db::DbPool;
use crate::errors::{AppError, is_unique_violation};
use crate::models::event;
use crate::models::participant::{
    self, ApiParticipantResponse, NewParticipant, RegistrationRequest,
};

/// POST /api/participants/register
///
/// Validates the payload at the boundary, checks every referenced event
/// exists, hashes the credential, then creates the participant and its
/// registrations in one transaction.
pub async fn register(
    pool: web::Data<DbPool>,
    body: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.name, "Name", 100));
    errors.extend(validate::validate_email(&body.email));
    errors.extend(validate::validate_contact(&body.contact));
    if body.password.is_empty() {
        errors.push("Password is required".to_string());
    }
    errors.extend(validate::validate_usn(&body.usn));
    errors.extend(validate::validate_required(&body.college, "College", 200));
    if body.events_registered.is_empty() {
        errors.push("At least one event must be selected".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    // Resolve event references before touching the participants table.
    let mut event_ids = Vec::with_capacity(body.events_registered.len());
    for raw in &body.events_registered {
        let id: i64 = raw
            .parse()
            .map_err(|_| AppError::Validation(format!("Invalid event id: {raw}")))?;
        event_ids.push(id);
    }
    event_ids.sort_unstable();
    event_ids.dedup();
    for &id in &event_ids {
        if event::find_by_id(&pool, id).await?.is_none() {
            return Err(AppError::Validation(format!("Unknown event id: {id}")));
        }
    }

    let email = body.email.trim().to_string();
    if participant::find_by_email(&pool, &email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let hashed = password::hash_password(&body.password)
        .map_err(|_| AppError::Hash("Password hash failed".to_string()))?;

    let new = NewParticipant {
        name: body.name.trim().to_string(),
        email,
        contact: body.contact.clone(),
        password: hashed,
        usn: body.usn.trim().to_string(),
        college: body.college.trim().to_string(),
    };

    // The UNIQUE constraint closes the race between the pre-check and the insert.
    let participant_id = match participant::register(&pool, &new, &event_ids).await {
        Ok(id) => id,
        Err(AppError::Db(e)) if is_unique_violation(&e) => {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        Err(e) => return Err(e),
    };

    let created = participant::find_by_id(&pool, participant_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let registered = participant::event_ids_for(&pool, participant_id).await?;

    Ok(HttpResponse::Created().json(ApiParticipantResponse::from_parts(created, registered)))
}
