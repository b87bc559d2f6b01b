use actix_session::Session;

use crate::errors::AppError;

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

pub fn get_username(session: &Session) -> Option<String> {
    session.get::<String>("username").unwrap_or(None)
}

/// Require a logged-in organizer; returns the user id or 401.
pub fn require_user(session: &Session) -> Result<i64, AppError> {
    get_user_id(session).ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
}
