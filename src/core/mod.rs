//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gateway verso il database
//! - Gestione errori
//! - Guard sui metodi HTTP ed estrattori
//! - Stato applicazione

pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod guard;
pub mod state;

pub use config::{Config, DatabaseConfig, PoolSettings};
pub use database::Database;
pub use error::{AppError, ConfigError, ConnectionError, DecodeError, PersistenceError};
pub use extract::JsonBody;
pub use guard::require_method;
pub use state::AppState;
