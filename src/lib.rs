//! Server library - espone i moduli principali per i test

pub mod bootstrap;
pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, config};

use axum::{Router, http::Method, middleware, routing::any};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Crea il router principale dell'applicazione.
/// Le rotte dei vendor accettano un solo metodo; ogni altro path viene servito
/// da `state.static_dir`.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .nest("/vendor1", configure_vendor1_routes())
        .nest("/vendor2", configure_vendor2_routes())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Vendor #1: list everything, create new submissions
fn configure_vendor1_routes() -> Router<Arc<AppState>> {
    use crate::core::require_method;
    use crate::services::*;

    Router::new()
        .route(
            "/listsubmissions",
            any(list_submissions)
                .layer(middleware::from_fn_with_state(Method::GET, require_method)),
        )
        .route(
            "/newsubmission",
            any(create_submission)
                .layer(middleware::from_fn_with_state(Method::POST, require_method)),
        )
}

/// Vendor #2: mark submissions complete
fn configure_vendor2_routes() -> Router<Arc<AppState>> {
    use crate::core::require_method;
    use crate::services::*;

    Router::new().route(
        "/newsubmission",
        any(complete_submission)
            .layer(middleware::from_fn_with_state(Method::POST, require_method)),
    )
}
