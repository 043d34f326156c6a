//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene i DTOs usati per la comunicazione con i vendor.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod submission;

pub use submission::{CompleteSubmissionDTO, CreateSubmissionDTO, SubmissionListDTO};
