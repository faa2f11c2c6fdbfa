//! # services
//!
//! Use cases of the forum. Each one validates its payload into an entity,
//! then drives the repository ports in a fixed order. Errors are returned to
//! the caller as-is; nothing here retries, logs failures, or swallows them.

pub mod comments;
pub mod error;
pub mod threads;

use std::sync::Arc;

use domains::{CommentRepository, ThreadRepository};

pub use comments::{AddCommentUseCase, DeleteCommentUseCase};
pub use error::{ErrorCategory, UseCase, UseCaseError};
pub use threads::{AddThreadUseCase, GetThreadUseCase};

/// Every use case wired against one pair of repositories. This is what the
/// delivery layer holds on to.
pub struct UseCases {
    pub add_thread: AddThreadUseCase,
    pub get_thread: GetThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
}

impl UseCases {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            add_thread: AddThreadUseCase::new(thread_repository.clone()),
            get_thread: GetThreadUseCase::new(
                thread_repository.clone(),
                comment_repository.clone(),
            ),
            add_comment: AddCommentUseCase::new(
                thread_repository.clone(),
                comment_repository.clone(),
            ),
            delete_comment: DeleteCommentUseCase::new(thread_repository, comment_repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{MockCommentRepository, MockThreadRepository};
    use serde_json::json;

    #[tokio::test]
    async fn bundle_shares_the_same_repositories() {
        let mut threads = MockThreadRepository::new();
        threads.expect_is_thread_exist().times(2).returning(|_| Ok(false));
        let use_cases = UseCases::new(Arc::new(threads), Arc::new(MockCommentRepository::new()));

        let add = use_cases
            .add_comment
            .execute(&json!({ "content": "c", "threadId": "thread-1", "owner": "user-1" }))
            .await
            .unwrap_err();
        let delete = use_cases
            .delete_comment
            .execute(&json!({ "id": "comment-1", "threadId": "thread-1", "owner": "user-1" }))
            .await
            .unwrap_err();

        assert_eq!(add.code(), "ADD_COMMENT_USE_CASE.THREAD_NOT_FOUND");
        assert_eq!(delete.code(), "DELETE_COMMENT_USE_CASE.THREAD_NOT_FOUND");
    }
}
