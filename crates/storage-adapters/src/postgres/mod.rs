//! # Postgres adapters
//!
//! Data mapping between the `threads` / `comments` tables and the domain
//! entities. Each port call is one autocommitted statement on the shared pool.
//!
//! Expected schema (owned by the migration tooling, not by this crate):
//!
//! ```text
//! users    (id TEXT PK, username TEXT)
//! threads  (id TEXT PK, title TEXT, body TEXT, owner TEXT, date TIMESTAMPTZ)
//! comments (id TEXT PK, content TEXT, owner TEXT,
//!           thread_id TEXT REFERENCES threads(id), date TIMESTAMPTZ,
//!           is_delete BOOLEAN DEFAULT FALSE)
//! ```

mod comment_repository;
mod pool;
mod thread_repository;

pub use comment_repository::PostgresCommentRepository;
pub use pool::create_pool;
pub use sqlx::PgPool;
pub use thread_repository::PostgresThreadRepository;
