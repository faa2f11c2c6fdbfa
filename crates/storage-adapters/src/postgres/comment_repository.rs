//! Postgres implementation of `CommentRepository`.
//!
//! Deleting a comment only flips `is_delete`; rows are never removed.

use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedComment, Comment, CommentRepository, NewComment, RepositoryError};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::ids::IdGenerator;

pub struct PostgresCommentRepository {
    pool: PgPool,
    ids: IdGenerator,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool, ids: IdGenerator) -> Self {
        Self { pool, ids }
    }
}

fn added_comment_from_row(row: &PgRow) -> Result<AddedComment, sqlx::Error> {
    Ok(AddedComment {
        id: row.try_get("id")?,
        content: row.try_get("content")?,
        owner: row.try_get("owner")?,
    })
}

fn comment_from_row(row: &PgRow) -> Result<Comment, sqlx::Error> {
    Ok(Comment {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        date: row.try_get("date")?,
        content: row.try_get("content")?,
        is_delete: row.try_get("is_delete")?,
    })
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    #[tracing::instrument(
        level = "debug",
        skip(self, new_comment),
        fields(thread_id = %new_comment.thread_id, owner = %new_comment.owner)
    )]
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, RepositoryError> {
        let id = self.ids.next_id("comment");
        let row = sqlx::query(
            "INSERT INTO comments (id, content, owner, thread_id, date, is_delete) \
             VALUES ($1, $2, $3, $4, $5, FALSE) \
             RETURNING id, content, owner",
        )
        .bind(id.as_str())
        .bind(new_comment.content.as_str())
        .bind(new_comment.owner.as_str())
        .bind(new_comment.thread_id.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        added_comment_from_row(&row).map_err(RepositoryError::storage)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn is_comment_exist(&self, comment_id: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM comments WHERE id = $1)")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::storage)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn is_comment_owner(&self, comment_id: &str, owner: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM comments WHERE id = $1 AND owner = $2)",
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::storage)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_comment(&self, comment_id: &str) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT comments.id, comments.content, comments.date, comments.is_delete, \
                    COALESCE(users.username, comments.owner) AS username \
             FROM comments \
             LEFT JOIN users ON users.id = comments.owner \
             WHERE comments.thread_id = $1 \
             ORDER BY comments.date ASC, comments.id ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        rows.iter()
            .map(comment_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::storage)
    }
}
