//! Repository boundary
//!
//! Handlers only see `dyn SubmissionStore`, so the MySQL implementation can be
//! swapped for an in-memory one in HTTP tests.

use crate::core::PersistenceError;
use crate::dtos::CreateSubmissionDTO;
use crate::entities::Submission;
use async_trait::async_trait;

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Every stored submission, ordered by `id` ascending. Empty table, empty vec.
    async fn list(&self) -> Result<Vec<Submission>, PersistenceError>;

    /// Inserts one row; the id is assigned by the database.
    ///
    /// # Returns
    /// * `Ok(n)` - rows affected (1 on success)
    async fn create(&self, data: &CreateSubmissionDTO) -> Result<u64, PersistenceError>;

    /// Sets the status of **every** row matching `(email, topic)` to
    /// `COMPLETE`. The pair is not unique, so zero, one or many rows may be
    /// touched; zero is not an error.
    ///
    /// # Returns
    /// * `Ok(n)` - rows affected
    async fn mark_complete(&self, email: &str, topic: &str) -> Result<u64, PersistenceError>;
}
