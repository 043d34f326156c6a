//! Repositories module
//!
//! Queries use the runtime-checked `sqlx::query`/`sqlx::query_as` builders with
//! `?` placeholders and `.bind(...)`, so the crate builds without a live
//! database. Each call goes through `Database`, which bounds it with the
//! configured timeout.

pub mod submission;
pub mod traits;

pub use submission::MySqlSubmissionRepository;
pub use traits::SubmissionStore;
