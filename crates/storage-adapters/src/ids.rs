//! Id generation for persisted rows.
//!
//! Adapters receive the generator at construction so tests can pin ids.

use std::fmt;
use std::sync::Arc;

/// Produces the unique suffix of a new row id (`thread-<suffix>`, `comment-<suffix>`).
#[derive(Clone)]
pub struct IdGenerator(Arc<dyn Fn() -> String + Send + Sync>);

impl IdGenerator {
    pub fn new<F>(generate: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(generate))
    }

    /// Always yields the same suffix. Only useful in tests.
    pub fn fixed(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        Self::new(move || suffix.clone())
    }

    pub fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", (self.0)())
    }
}

impl Default for IdGenerator {
    /// Simple-format UUID v4 (32 hex chars, no dashes).
    fn default() -> Self {
        Self::new(|| uuid::Uuid::new_v4().simple().to_string())
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdGenerator")
    }
}
