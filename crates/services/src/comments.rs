//! Comment use cases.
//!
//! Both enforce the same gate order: the thread must exist before anything
//! else is asked about the comment, and ownership is only checked on a comment
//! that exists.

use std::sync::Arc;

use domains::{AddedComment, CommentRepository, DeleteComment, NewComment, ThreadRepository};
use serde_json::Value;

use crate::error::{UseCase, UseCaseError};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedComment, UseCaseError> {
        let new_comment = NewComment::from_payload(payload)?;
        tracing::debug!(thread_id = %new_comment.thread_id, "adding comment");

        if !self
            .thread_repository
            .is_thread_exist(&new_comment.thread_id)
            .await?
        {
            return Err(UseCaseError::ThreadNotFound(UseCase::AddComment));
        }

        Ok(self.comment_repository.add_comment(&new_comment).await?)
    }
}

pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Soft-deletes a comment. Stops at the first failed check:
    /// thread exists, comment exists, caller owns the comment.
    pub async fn execute(&self, payload: &Value) -> Result<(), UseCaseError> {
        let DeleteComment {
            id,
            owner,
            thread_id,
        } = DeleteComment::from_payload(payload)?;
        tracing::debug!(comment_id = %id, thread_id = %thread_id, "deleting comment");

        if !self.thread_repository.is_thread_exist(&thread_id).await? {
            return Err(UseCaseError::ThreadNotFound(UseCase::DeleteComment));
        }
        if !self.comment_repository.is_comment_exist(&id).await? {
            return Err(UseCaseError::CommentNotFound(UseCase::DeleteComment));
        }
        if !self.comment_repository.is_comment_owner(&id, &owner).await? {
            return Err(UseCaseError::CommentNotOwned(UseCase::DeleteComment));
        }

        self.comment_repository.delete_comment(&id).await?;
        Ok(())
    }
}
