//! Authentication tests — password hashing, verification, account
//! creation, and lookup for the login path.

mod common;

use common::setup_test_db;
use eventhub::auth::{password, validate};
use eventhub::errors::{self, AppError};
use eventhub::models::user::{self, NewUser};

const TEST_PASSWORD: &str = "password123";

#[test]
fn test_hash_password_success() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    assert!(!hash.is_empty());
    assert!(hash.len() > 20); // Argon2 hashes are long
}

#[test]
fn test_verify_password_correct() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    let verified = password::verify_password(TEST_PASSWORD, &hash).expect("Verification failed");

    assert!(verified);
}

#[test]
fn test_verify_password_incorrect() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    let verified = password::verify_password("wrongpassword", &hash).expect("Verification failed");

    assert!(!verified);
}

#[test]
fn test_hash_password_randomness() {
    let hash1 = password::hash_password(TEST_PASSWORD).expect("Failed to hash first password");
    let hash2 = password::hash_password(TEST_PASSWORD).expect("Failed to hash second password");

    // Same password should produce different hashes (different salts)
    assert_ne!(hash1, hash2);
}

#[test]
fn test_account_validation_rules() {
    assert!(validate::validate_username("alice").is_none());
    assert!(validate::validate_username("").is_some());
    assert!(validate::validate_username("a").is_some());
    assert!(validate::validate_username("bad name!").is_some());

    assert!(validate::validate_password("longenough1").is_none());
    assert!(validate::validate_password("short").is_some());
}

#[tokio::test]
async fn test_create_account_and_find_by_username() {
    let db = setup_test_db().await;
    let pool = db.pool();

    let hash = password::hash_password(TEST_PASSWORD).expect("hash");
    let new = NewUser {
        username: "alice".to_string(),
        email: "alice@test.com".to_string(),
        password: hash,
    };
    let id = user::create(pool, &new).await.expect("create");
    assert!(id > 0);

    let found = user::find_by_username(pool, "alice")
        .await
        .expect("query")
        .expect("not found");
    assert_eq!(found.email, "alice@test.com");
    assert!(password::verify_password(TEST_PASSWORD, &found.password).expect("verify"));

    assert!(
        user::find_by_username(pool, "nobody")
            .await
            .expect("query")
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_username_is_unique_violation() {
    let db = setup_test_db().await;
    let pool = db.pool();

    let make = |email: &str| NewUser {
        username: "alice".to_string(),
        email: email.to_string(),
        password: password::hash_password(TEST_PASSWORD).expect("hash"),
    };

    user::create(pool, &make("alice@test.com")).await.expect("create");
    let err = user::create(pool, &make("other@test.com"))
        .await
        .expect_err("duplicate username must fail");
    match err {
        AppError::Db(e) => assert!(errors::is_unique_violation(&e)),
        other => panic!("expected a unique violation, got {other}"),
    }
}
