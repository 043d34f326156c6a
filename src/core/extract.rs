//! JSON body extractor that ignores Content-Type and reports failures as `DecodeError`

use super::error::{AppError, DecodeError};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but any request carrying a parseable body is accepted and
/// every rejection (unreadable body, bad JSON, missing field) becomes a 500.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::internal_server_error("decode error").with_details(rejection.body_text())
        })?;
        let value = serde_json::from_slice(&bytes).map_err(DecodeError::from)?;
        Ok(JsonBody(value))
    }
}
