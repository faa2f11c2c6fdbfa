//! # Core Traits (Ports)
//!
//! Persistence contracts consumed by the use cases. Every method has a default
//! body that fails with `*.METHOD_NOT_IMPLEMENTED`, so an implementation only
//! overrides what it supports.

use async_trait::async_trait;

use crate::error::{PortName, RepositoryError};
use crate::models::{AddedComment, AddedThread, Comment, NewComment, NewThread, Thread};

/// Data persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, RepositoryError> {
        let _ = new_thread;
        Err(RepositoryError::NotImplemented(PortName::ThreadRepository))
    }

    async fn is_thread_exist(&self, thread_id: &str) -> Result<bool, RepositoryError> {
        let _ = thread_id;
        Err(RepositoryError::NotImplemented(PortName::ThreadRepository))
    }

    /// Returns the thread without comments, or `None` when the id is unknown.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Option<Thread>, RepositoryError> {
        let _ = thread_id;
        Err(RepositoryError::NotImplemented(PortName::ThreadRepository))
    }
}

/// Data persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, RepositoryError> {
        let _ = new_comment;
        Err(RepositoryError::NotImplemented(PortName::CommentRepository))
    }

    async fn is_comment_exist(&self, comment_id: &str) -> Result<bool, RepositoryError> {
        let _ = comment_id;
        Err(RepositoryError::NotImplemented(PortName::CommentRepository))
    }

    async fn is_comment_owner(&self, comment_id: &str, owner: &str) -> Result<bool, RepositoryError> {
        let _ = (comment_id, owner);
        Err(RepositoryError::NotImplemented(PortName::CommentRepository))
    }

    /// Soft delete: the row stays, only its delete flag flips.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), RepositoryError> {
        let _ = comment_id;
        Err(RepositoryError::NotImplemented(PortName::CommentRepository))
    }

    /// All comments of a thread, oldest first, deleted ones included.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>, RepositoryError> {
        let _ = thread_id;
        Err(RepositoryError::NotImplemented(PortName::CommentRepository))
    }
}
