//! The use cases only see the ports. These tests drive them through a plain
//! in-memory double and check that the Postgres adapters plug into the same
//! seams. No database needed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use domains::{
    AddedComment, AddedThread, Comment, CommentRepository, NewComment, NewThread,
    RepositoryError, Thread, ThreadRepository,
};
use serde_json::json;
use services::{ErrorCategory, UseCases};
use sqlx::postgres::PgPoolOptions;
use storage_adapters::postgres::{PostgresCommentRepository, PostgresThreadRepository};
use storage_adapters::IdGenerator;

struct StoredComment {
    thread_id: String,
    owner: String,
    comment: Comment,
}

#[derive(Default)]
struct InMemoryForum {
    threads: Mutex<HashMap<String, Thread>>,
    comments: Mutex<Vec<StoredComment>>,
}

#[async_trait]
impl ThreadRepository for InMemoryForum {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, RepositoryError> {
        let mut threads = self.threads.lock().unwrap();
        let id = format!("thread-{}", threads.len() + 1);
        threads.insert(
            id.clone(),
            Thread::new(
                id.clone(),
                new_thread.title.clone(),
                new_thread.body.clone(),
                Utc::now(),
                new_thread.owner.clone(),
            ),
        );
        Ok(AddedThread {
            id,
            title: new_thread.title.clone(),
            owner: new_thread.owner.clone(),
        })
    }

    async fn is_thread_exist(&self, thread_id: &str) -> Result<bool, RepositoryError> {
        Ok(self.threads.lock().unwrap().contains_key(thread_id))
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Option<Thread>, RepositoryError> {
        Ok(self.threads.lock().unwrap().get(thread_id).cloned())
    }
}

#[async_trait]
impl CommentRepository for InMemoryForum {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, RepositoryError> {
        let mut comments = self.comments.lock().unwrap();
        let id = format!("comment-{}", comments.len() + 1);
        comments.push(StoredComment {
            thread_id: new_comment.thread_id.clone(),
            owner: new_comment.owner.clone(),
            comment: Comment {
                id: id.clone(),
                username: new_comment.owner.clone(),
                date: Utc::now(),
                content: new_comment.content.clone(),
                is_delete: false,
            },
        });
        Ok(AddedComment {
            id,
            content: new_comment.content.clone(),
            owner: new_comment.owner.clone(),
        })
    }

    async fn is_comment_exist(&self, comment_id: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .any(|stored| stored.comment.id == comment_id))
    }

    async fn is_comment_owner(&self, comment_id: &str, owner: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .any(|stored| stored.comment.id == comment_id && stored.owner == owner))
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), RepositoryError> {
        for stored in self.comments.lock().unwrap().iter_mut() {
            if stored.comment.id == comment_id {
                stored.comment.is_delete = true;
            }
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>, RepositoryError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|stored| stored.thread_id == thread_id)
            .map(|stored| stored.comment.clone())
            .collect())
    }
}

/// Knows about threads but never learned comments.
struct ThreadsOnly;

#[async_trait]
impl ThreadRepository for ThreadsOnly {
    async fn is_thread_exist(&self, _thread_id: &str) -> Result<bool, RepositoryError> {
        Ok(true)
    }
}

impl CommentRepository for ThreadsOnly {}

fn in_memory_use_cases() -> UseCases {
    let forum = Arc::new(InMemoryForum::default());
    UseCases::new(forum.clone(), forum)
}

#[tokio::test]
async fn full_comment_lifecycle_through_the_ports() {
    let use_cases = in_memory_use_cases();

    let thread = use_cases
        .add_thread
        .execute(&json!({ "title": "hello", "body": "first post", "owner": "user-1" }))
        .await
        .unwrap();
    assert_eq!(thread.title, "hello");

    let comment = use_cases
        .add_comment
        .execute(&json!({ "content": "nice", "threadId": thread.id, "owner": "user-2" }))
        .await
        .unwrap();
    assert_eq!(comment.owner, "user-2");

    let err = use_cases
        .delete_comment
        .execute(&json!({ "id": comment.id, "threadId": thread.id, "owner": "user-1" }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DELETE_COMMENT_USE_CASE.COMMENT_NOT_OWNED");
    assert_eq!(err.category(), ErrorCategory::Authorization);

    use_cases
        .delete_comment
        .execute(&json!({ "id": comment.id, "threadId": thread.id, "owner": "user-2" }))
        .await
        .unwrap();

    let loaded = use_cases.get_thread.execute(&thread.id).await.unwrap();
    assert_eq!(loaded.comments().len(), 1);
    assert!(loaded.comments()[0].is_delete);
}

#[tokio::test]
async fn unknown_thread_and_comment_are_not_found() {
    let use_cases = in_memory_use_cases();

    let err = use_cases.get_thread.execute("thread-404").await.unwrap_err();
    assert_eq!(err.code(), "GET_THREAD_USE_CASE.THREAD_NOT_FOUND");
    assert_eq!(err.category().status_code(), 404);

    let thread = use_cases
        .add_thread
        .execute(&json!({ "title": "t", "body": "b", "owner": "user-1" }))
        .await
        .unwrap();
    let err = use_cases
        .delete_comment
        .execute(&json!({ "id": "comment-404", "threadId": thread.id, "owner": "user-1" }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DELETE_COMMENT_USE_CASE.COMMENT_NOT_FOUND");
}

#[tokio::test]
async fn missing_overrides_surface_as_not_implemented() {
    let ports = Arc::new(ThreadsOnly);
    let use_cases = UseCases::new(ports.clone(), ports);

    let err = use_cases
        .add_comment
        .execute(&json!({ "content": "c", "threadId": "thread-1", "owner": "user-1" }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "COMMENT_REPOSITORY.METHOD_NOT_IMPLEMENTED");
    assert_eq!(err.category(), ErrorCategory::Internal);

    let err = use_cases
        .add_thread
        .execute(&json!({ "title": "t", "body": "b", "owner": "user-1" }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "THREAD_REPOSITORY.METHOD_NOT_IMPLEMENTED");
}

#[tokio::test]
async fn postgres_adapters_plug_into_the_use_cases() {
    // Lazy pool: nothing connects unless a query runs.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://forum@localhost/forum")
        .unwrap();

    let threads: Arc<dyn ThreadRepository> =
        Arc::new(PostgresThreadRepository::new(pool.clone(), IdGenerator::default()));
    let comments: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool, IdGenerator::fixed("123")));
    let use_cases = UseCases::new(threads, comments);

    // Validation happens before any I/O, so this never reaches the pool.
    let err = use_cases
        .add_comment
        .execute(&json!({ "threadId": "thread-123", "owner": "user-123" }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
}
