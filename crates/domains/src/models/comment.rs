//! Comment entities: the insert payload, the insert result, the delete request
//! and the persisted comment as rendered inside a thread.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{EntityName, ValidationError};
use crate::payload::Fields;

/// A comment someone wants to post on a thread. Never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub owner: String,
    pub thread_id: String,
}

impl NewComment {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::require(
            EntityName::NewComment,
            payload,
            &["content", "owner", "threadId"],
        )?;
        Ok(Self {
            content: fields.string("content")?,
            owner: fields.string("owner")?,
            thread_id: fields.string("threadId")?,
        })
    }
}

/// What the storage layer hands back after a comment insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::require(
            EntityName::AddedComment,
            payload,
            &["id", "content", "owner"],
        )?;
        Ok(Self {
            id: fields.string("id")?,
            content: fields.string("content")?,
            owner: fields.string("owner")?,
        })
    }
}

/// A request to soft-delete comment `id` on thread `thread_id` on behalf of `owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteComment {
    pub id: String,
    pub owner: String,
    pub thread_id: String,
}

impl DeleteComment {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::require(
            EntityName::DeleteComment,
            payload,
            &["id", "owner", "threadId"],
        )?;
        Ok(Self {
            id: fields.string("id")?,
            owner: fields.string("owner")?,
            thread_id: fields.string("threadId")?,
        })
    }
}

/// A persisted comment as listed under its thread.
///
/// Soft-deleted comments keep their content; `is_delete` tells the
/// presentation layer to mask it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

impl Comment {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::require(
            EntityName::Comment,
            payload,
            &["id", "username", "date", "content", "isDelete"],
        )?;
        Ok(Self {
            id: fields.string("id")?,
            username: fields.string("username")?,
            date: fields.timestamp("date")?,
            content: fields.string("content")?,
            is_delete: fields.boolean("isDelete")?,
        })
    }
}
