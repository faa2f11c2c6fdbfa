use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::Comment;
use crate::error::{EntityName, ValidationError};
use crate::payload::Fields;

/// A thread someone wants to open. Never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::require(EntityName::NewThread, payload, &["title", "body", "owner"])?;
        Ok(Self {
            title: fields.string("title")?,
            body: fields.string("body")?,
            owner: fields.string("owner")?,
        })
    }
}

/// What the storage layer hands back after a thread insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::require(EntityName::AddedThread, payload, &["id", "title", "owner"])?;
        Ok(Self {
            id: fields.string("id")?,
            title: fields.string("title")?,
            owner: fields.string("owner")?,
        })
    }
}

/// A thread with its comments, as shown to readers.
///
/// `comments` starts empty and only changes through the setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    comments: Vec<Comment>,
}

impl Thread {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        date: DateTime<Utc>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            date,
            username: username.into(),
            comments: Vec::new(),
        }
    }

    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::require(
            EntityName::Thread,
            payload,
            &["id", "title", "body", "date", "username"],
        )?;
        Ok(Self::new(
            fields.string("id")?,
            fields.string("title")?,
            fields.string("body")?,
            fields.timestamp("date")?,
            fields.string("username")?,
        ))
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    /// Replaces the comments from an untyped list. Nothing changes on failure.
    pub fn set_comments_from_value(&mut self, comments: &Value) -> Result<(), ValidationError> {
        let items = comments.as_array().ok_or(ValidationError::CommentsNotArray)?;
        let parsed = items
            .iter()
            .map(Comment::from_payload)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ValidationError::CommentsContainsInvalidMember)?;
        self.comments = parsed;
        Ok(())
    }
}
