//! Submission entity - una proposta di talk, riga della tabella `submissions`

use serde::{Deserialize, Serialize};

/// Status written by the vendor2 completion path, whatever the caller sent.
pub const STATUS_COMPLETE: &str = "COMPLETE";

/// Columns are aliased in the SELECT (`speaker_name AS name`, ...) so the
/// row maps directly onto the JSON shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Submission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub topic: String,
    pub status: String,
}
