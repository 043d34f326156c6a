//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod submission;

pub use submission::{STATUS_COMPLETE, Submission};
