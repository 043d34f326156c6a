//! Application State - Stato globale dell'applicazione
//!
//! Contiene il repository delle submission e la cartella dei file statici.

use super::Database;
use crate::repositories::{MySqlSubmissionRepository, SubmissionStore};
use std::path::PathBuf;
use std::sync::Arc;

pub struct AppState {
    /// Repository for the `submissions` table
    pub submissions: Arc<dyn SubmissionStore>,

    /// Directory served at `/` for every path without a handler
    pub static_dir: PathBuf,
}

impl AppState {
    /// Crea una nuova istanza di AppState con il repository MySQL sopra `db`
    pub fn new(db: Database, static_dir: impl Into<PathBuf>) -> Self {
        Self::with_store(Arc::new(MySqlSubmissionRepository::new(db)), static_dir)
    }

    /// Builds the state around any store implementation.
    pub fn with_store(submissions: Arc<dyn SubmissionStore>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            submissions,
            static_dir: static_dir.into(),
        }
    }
}
