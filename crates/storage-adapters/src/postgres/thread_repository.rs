//! Postgres implementation of `ThreadRepository`.

use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedThread, NewThread, RepositoryError, Thread, ThreadRepository};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::ids::IdGenerator;

pub struct PostgresThreadRepository {
    pool: PgPool,
    ids: IdGenerator,
}

impl PostgresThreadRepository {
    pub fn new(pool: PgPool, ids: IdGenerator) -> Self {
        Self { pool, ids }
    }
}

fn added_thread_from_row(row: &PgRow) -> Result<AddedThread, sqlx::Error> {
    Ok(AddedThread {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        owner: row.try_get("owner")?,
    })
}

fn thread_from_row(row: &PgRow) -> Result<Thread, sqlx::Error> {
    Ok(Thread::new(
        row.try_get::<String, _>("id")?,
        row.try_get::<String, _>("title")?,
        row.try_get::<String, _>("body")?,
        row.try_get("date")?,
        row.try_get::<String, _>("username")?,
    ))
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    #[tracing::instrument(level = "debug", skip(self, new_thread), fields(owner = %new_thread.owner))]
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, RepositoryError> {
        let id = self.ids.next_id("thread");
        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner, date) VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, owner",
        )
        .bind(id.as_str())
        .bind(new_thread.title.as_str())
        .bind(new_thread.body.as_str())
        .bind(new_thread.owner.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        added_thread_from_row(&row).map_err(RepositoryError::storage)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn is_thread_exist(&self, thread_id: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM threads WHERE id = $1)")
            .bind(thread_id)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::storage)
    }

    /// The owner's display name comes from `users`; the raw owner id stands in
    /// when no user row exists.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Option<Thread>, RepositoryError> {
        let row = sqlx::query(
            "SELECT threads.id, threads.title, threads.body, threads.date, \
                    COALESCE(users.username, threads.owner) AS username \
             FROM threads \
             LEFT JOIN users ON users.id = threads.owner \
             WHERE threads.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        row.as_ref()
            .map(thread_from_row)
            .transpose()
            .map_err(RepositoryError::storage)
    }
}
