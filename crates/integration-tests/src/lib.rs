//! Shared fixtures for the cross-crate tests.
//!
//! The Postgres helpers create the tables the adapters expect and seed rows
//! directly, bypassing the repositories under test. Every test uses its own
//! ids (see [`unique`]) so tests can share one database and run in parallel.

use std::sync::Once;

use chrono::{DateTime, Utc};
use configs::Settings;
use sqlx::{PgPool, Row};
use storage_adapters::postgres::create_pool;

static TRACING: Once = Once::new();

/// A fresh suffix for row ids, e.g. `thread-{unique()}`.
pub fn unique() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Connects using `FORUM__DATABASE__URL` and makes sure the schema exists.
pub async fn test_pool() -> anyhow::Result<PgPool> {
    let settings = Settings::load()?;
    TRACING.call_once(|| {
        // Another harness may already own the global subscriber.
        let _ = configs::init_tracing(&settings.log);
    });

    let pool = create_pool(&settings.database).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates `users`, `threads` and `comments` if missing. Serialised with an
/// advisory lock because concurrent `CREATE TABLE IF NOT EXISTS` can collide.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(4242)")
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL
        )",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS threads (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            owner TEXT NOT NULL,
            date TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS comments (
            id TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            owner TEXT NOT NULL,
            thread_id TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
            date TIMESTAMPTZ NOT NULL,
            is_delete BOOLEAN NOT NULL DEFAULT FALSE
        )",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

pub async fn add_user(pool: &PgPool, id: &str, username: &str) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
        .bind(id)
        .bind(username)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn add_thread(pool: &PgPool, id: &str, owner: &str) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO threads (id, title, body, owner, date) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind("sebuah thread")
        .bind("sebuah body thread")
        .bind(owner)
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn add_comment_at(
    pool: &PgPool,
    id: &str,
    thread_id: &str,
    owner: &str,
    date: DateTime<Utc>,
) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO comments (id, content, owner, thread_id, date, is_delete) \
         VALUES ($1, $2, $3, $4, $5, FALSE)",
    )
    .bind(id)
    .bind("sebuah comment")
    .bind(owner)
    .bind(thread_id)
    .bind(date)
    .execute(pool)
    .await?;
    Ok(())
}

/// A `comments` row exactly as stored.
#[derive(Debug)]
pub struct CommentRow {
    pub id: String,
    pub content: String,
    pub owner: String,
    pub thread_id: String,
    pub date: DateTime<Utc>,
    pub is_delete: bool,
}

pub async fn find_comment_by_id(pool: &PgPool, id: &str) -> anyhow::Result<Option<CommentRow>> {
    let row = sqlx::query(
        "SELECT id, content, owner, thread_id, date, is_delete FROM comments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    Ok(Some(CommentRow {
        id: row.try_get("id")?,
        content: row.try_get("content")?,
        owner: row.try_get("owner")?,
        thread_id: row.try_get("thread_id")?,
        date: row.try_get("date")?,
        is_delete: row.try_get("is_delete")?,
    }))
}
