use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);
    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Seed the default admin account if no organizer accounts exist yet.
pub async fn seed_admin(pool: &DbPool, admin_password_hash: &str) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        log::info!("Accounts already present ({count}), skipping admin seed");
        return Ok(());
    }

    sqlx::query("INSERT INTO users (username, email, password) VALUES (?, ?, ?)")
        .bind("admin")
        .bind("admin@example.com")
        .bind(admin_password_hash)
        .execute(pool)
        .await?;
    log::info!("Seeded default admin account");
    Ok(())
}
