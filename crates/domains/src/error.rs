//! # Domain errors
//!
//! Two families live here: payload validation failures raised while building
//! an entity, and repository failures raised by port implementations.
//! Every variant renders as a stable dotted code (e.g. `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`).

use std::fmt;

use thiserror::Error;

/// The entity whose payload failed validation. Its `Display` is the code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityName {
    NewThread,
    AddedThread,
    Thread,
    NewComment,
    AddedComment,
    DeleteComment,
    Comment,
}

impl EntityName {
    pub const fn code_prefix(self) -> &'static str {
        match self {
            EntityName::NewThread => "NEW_THREAD",
            EntityName::AddedThread => "ADDED_THREAD",
            EntityName::Thread => "THREAD",
            EntityName::NewComment => "NEW_COMMENT",
            EntityName::AddedComment => "ADDED_COMMENT",
            EntityName::DeleteComment => "DELETE_COMMENT",
            EntityName::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code_prefix())
    }
}

/// Payload validation failure. Raised synchronously, before any I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required key is absent (or null).
    #[error("{entity}.NOT_CONTAIN_NEEDED_PROPERTY")]
    MissingProperty {
        entity: EntityName,
        field: &'static str,
    },

    /// A key is present but holds the wrong primitive type.
    #[error("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    DataTypeMismatch {
        entity: EntityName,
        field: &'static str,
    },

    #[error("THREAD.COMMENTS_NOT_ARRAY")]
    CommentsNotArray,

    #[error("THREAD.COMMENTS_CONTAINS_INVALID_MEMBER")]
    CommentsContainsInvalidMember,
}

impl ValidationError {
    /// The stable dotted code, identical to the `Display` output.
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// The payload key that triggered the failure, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingProperty { field, .. }
            | ValidationError::DataTypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Which port a repository error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortName {
    ThreadRepository,
    CommentRepository,
}

impl fmt::Display for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortName::ThreadRepository => f.write_str("THREAD_REPOSITORY"),
            PortName::CommentRepository => f.write_str("COMMENT_REPOSITORY"),
        }
    }
}

/// Failure surfaced by a repository implementation.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The implementation did not override this port method.
    #[error("{0}.METHOD_NOT_IMPLEMENTED")]
    NotImplemented(PortName),

    /// Infrastructure failure (e.g., DB down, pool exhausted)
    #[error("storage failure: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        RepositoryError::Storage(err.into())
    }
}
