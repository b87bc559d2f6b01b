//! Shared test infrastructure: a tempfile-backed SQLite database with the
//! schema applied, plus a few fixture helpers.
#![allow(dead_code)]

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

use eventhub::db::{DbPool, MIGRATIONS};

pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Setup a test database with the schema applied.
///
/// The TempDir is kept inside the returned TestDb so the database file
/// outlives the pool.
pub async fn setup_test_db() -> TestDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .expect("Failed to open test DB");

    sqlx::raw_sql(MIGRATIONS)
        .execute(&pool)
        .await
        .expect("Failed to run migrations");

    TestDb { _dir: dir, pool }
}

pub async fn create_event(pool: &DbPool, title: &str) -> i64 {
    eventhub::models::event::create(pool, title, "", None)
        .await
        .expect("create event")
}

pub async fn create_account(pool: &DbPool, username: &str, password: &str) -> i64 {
    let hash = eventhub::auth::password::hash_password(password).expect("hash");
    let new = eventhub::models::user::NewUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password: hash,
    };
    eventhub::models::user::create(pool, &new)
        .await
        .expect("create account")
}
