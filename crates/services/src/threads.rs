//! Thread use cases: opening a thread and reading one with its comments.

use std::sync::Arc;

use domains::{AddedThread, CommentRepository, NewThread, Thread, ThreadRepository};
use serde_json::Value;

use crate::error::{UseCase, UseCaseError};

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedThread, UseCaseError> {
        let new_thread = NewThread::from_payload(payload)?;
        tracing::debug!(owner = %new_thread.owner, "adding thread");
        Ok(self.thread_repository.add_thread(&new_thread).await?)
    }
}

pub struct GetThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl GetThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Loads the thread, then its comments oldest first. Deleted comments are
    /// returned as-is with their flag set.
    pub async fn execute(&self, thread_id: &str) -> Result<Thread, UseCaseError> {
        tracing::debug!(thread_id, "loading thread");
        let mut thread = self
            .thread_repository
            .get_thread_by_id(thread_id)
            .await?
            .ok_or(UseCaseError::ThreadNotFound(UseCase::GetThread))?;

        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;
        thread.set_comments(comments);

        Ok(thread)
    }
}
