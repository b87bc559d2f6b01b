use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;

use crate::auth::session::require_user;
use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::event::{self, ApiEventResponse, EventRequest};

fn validate_event(body: &EventRequest) -> Vec<String> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.title, "Title", 200));
    if let Some(date) = body.date.as_deref() {
        if !date.is_empty() && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            errors.push("Date must be in YYYY-MM-DD format".to_string());
        }
    }
    errors
}

/// GET /api/events — full event list, creation order. Public.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let events = event::find_all(&pool).await?;
    let response: Vec<ApiEventResponse> = events.into_iter().map(ApiEventResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/events/{id}
pub async fn read(pool: web::Data<DbPool>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let event = event::find_by_id(&pool, path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiEventResponse::from(event)))
}

/// POST /api/events
pub async fn create(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<EventRequest>,
) -> Result<HttpResponse, AppError> {
    require_user(&session)?;

    let errors = validate_event(&body);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let id = event::create(
        &pool,
        body.title.trim(),
        body.description.trim(),
        body.date.as_deref().filter(|d| !d.is_empty()),
    )
    .await?;

    let created = event::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(ApiEventResponse::from(created)))
}

/// PUT /api/events/{id}
pub async fn update(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<EventRequest>,
) -> Result<HttpResponse, AppError> {
    require_user(&session)?;

    let id = path.into_inner();
    event::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let errors = validate_event(&body);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    event::update(
        &pool,
        id,
        body.title.trim(),
        body.description.trim(),
        body.date.as_deref().filter(|d| !d.is_empty()),
    )
    .await?;

    let updated = event::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiEventResponse::from(updated)))
}

/// DELETE /api/events/{id}
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    require_user(&session)?;

    let id = path.into_inner();
    event::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    event::delete(&pool, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
