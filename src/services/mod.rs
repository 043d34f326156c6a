//! Services module - Coordinatore per i service handler HTTP
//!
//! Handlers assume the verb was already checked by `core::require_method`.

pub mod submission;

pub use submission::{complete_submission, create_submission, list_submissions};
