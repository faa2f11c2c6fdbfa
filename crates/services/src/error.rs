//! # UseCaseError
//!
//! Orchestration failures plus the validation and repository errors that pass
//! through a use case untouched. `Display` is always the stable dotted code the
//! delivery layer matches on.

use std::fmt;

use domains::{RepositoryError, ValidationError};
use thiserror::Error;

/// Identifies the use case that raised an orchestration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    AddThread,
    AddComment,
    DeleteComment,
    GetThread,
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UseCase::AddThread => "ADD_THREAD_USE_CASE",
            UseCase::AddComment => "ADD_COMMENT_USE_CASE",
            UseCase::DeleteComment => "DELETE_COMMENT_USE_CASE",
            UseCase::GetThread => "GET_THREAD_USE_CASE",
        })
    }
}

#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("{0}.THREAD_NOT_FOUND")]
    ThreadNotFound(UseCase),

    #[error("{0}.COMMENT_NOT_FOUND")]
    CommentNotFound(UseCase),

    #[error("{0}.COMMENT_NOT_OWNED")]
    CommentNotOwned(UseCase),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// How the delivery layer should present an error to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request payload broke an entity invariant.
    Invariant,
    NotFound,
    /// The caller may not touch the resource.
    Authorization,
    Internal,
}

impl ErrorCategory {
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorCategory::Invariant => 400,
            ErrorCategory::Authorization => 403,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Internal => 500,
        }
    }
}

impl UseCaseError {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            UseCaseError::Validation(_) => ErrorCategory::Invariant,
            UseCaseError::ThreadNotFound(_) | UseCaseError::CommentNotFound(_) => {
                ErrorCategory::NotFound
            }
            UseCaseError::CommentNotOwned(_) => ErrorCategory::Authorization,
            UseCaseError::Repository(_) => ErrorCategory::Internal,
        }
    }
}
