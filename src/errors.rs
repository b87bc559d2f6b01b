use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Wire shape of every failure response.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody { message: message.into() }
    }
}

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    Hash(String),
    Session(String),
    Validation(String),
    Conflict(String),
    Unauthorized(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Hash(e) => write!(f, "Hash error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Validation(e) => write!(f, "Validation failed: {e}"),
            AppError::Conflict(e) => write!(f, "Conflict: {e}"),
            AppError::Unauthorized(e) => write!(f, "Unauthorized: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(ErrorBody::new(msg.clone())),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(ErrorBody::new(msg.clone())),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(ErrorBody::new(msg.clone())),
            AppError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("Not found")),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}

/// True when a store error is a UNIQUE constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
