use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::{password, validate};
use crate::db::DbPool;
use crate::errors::{AppError, is_unique_violation};
use crate::models::user::{self, ApiUserResponse, LoginRequest, NewUser, RegisterRequest};

/// POST /api/auth/register — create an organizer account.
pub async fn register(
    pool: web::Data<DbPool>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_username(&body.username));
    errors.extend(validate::validate_email(&body.email));
    errors.extend(validate::validate_password(&body.password));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let username = body.username.trim().to_string();
    let email = body.email.trim().to_string();

    if user::find_by_username(&pool, &username).await?.is_some() {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }
    if user::find_by_email(&pool, &email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let hashed = password::hash_password(&body.password)
        .map_err(|_| AppError::Hash("Password hash failed".to_string()))?;

    let new = NewUser { username, email, password: hashed };
    let id = match user::create(&pool, &new).await {
        Ok(id) => id,
        Err(AppError::Db(e)) if is_unique_violation(&e) => {
            return Err(AppError::Conflict("Account already exists".to_string()));
        }
        Err(e) => return Err(e),
    };

    let created = user::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(ApiUserResponse::from(created)))
}

/// POST /api/auth/login — verify credentials and open a session.
///
/// Unknown username and bad password collapse to the same response.
pub async fn login(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let found = user::find_by_username(&pool, body.username.trim()).await?;

    let user = match found {
        Some(u) if password::verify_password(&body.password, &u.password).unwrap_or(false) => u,
        _ => {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }
    };

    let _ = session.insert("user_id", user.id);
    let _ = session.insert("username", &user.username);
    Ok(HttpResponse::Ok().json(ApiUserResponse::from(user)))
}

/// POST /api/auth/logout
pub async fn logout(session: Session) -> Result<HttpResponse, AppError> {
    session.purge();
    Ok(HttpResponse::NoContent().finish())
}
