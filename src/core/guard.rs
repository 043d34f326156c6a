//! Method guard - rejects any verb other than the one a route accepts

use super::error::AppError;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, Response},
    middleware::Next,
};
use tracing::{debug, instrument};

/// Apply with `middleware::from_fn_with_state(Method::GET, require_method)`.
/// Runs before body decoding, so a wrong verb is always a 405.
#[instrument(skip(req, next), fields(method = %req.method(), path = %req.uri().path()))]
pub async fn require_method(
    State(allowed): State<Method>,
    req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    if req.method() != allowed {
        return Err(AppError::method_not_allowed()
            .with_details(format!("expected {allowed}, got {}", req.method())));
    }
    debug!("Method accepted");
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, middleware, routing::any};
    use axum_test::TestServer;

    fn server() -> TestServer {
        let app = Router::new().route(
            "/only-post",
            any(|| async { "ok" })
                .layer(middleware::from_fn_with_state(Method::POST, require_method)),
        );
        TestServer::new(app).expect("Failed to create test server")
    }

    #[tokio::test]
    async fn allowed_method_reaches_the_handler() {
        let response = server().post("/only-post").await;
        response.assert_status_ok();
        response.assert_text("ok");
    }

    #[tokio::test]
    async fn other_methods_get_plain_text_405() {
        let server = server();
        for response in [
            server.get("/only-post").await,
            server.put("/only-post").await,
            server.delete("/only-post").await,
        ] {
            response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
            response.assert_text("method not supported");
        }
    }
}
