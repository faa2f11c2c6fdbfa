//! # Domain Models
//!
//! Value objects for the forum. Each one can be built from an untyped JSON
//! payload and validates its shape exactly once, at construction.

mod comment;
mod thread;

pub use comment::{AddedComment, Comment, DeleteComment, NewComment};
pub use thread::{AddedThread, NewThread, Thread};
