//! Submission services - Gestione delle submission (vendor1 lista/crea, vendor2 completa)

use crate::core::{AppError, AppState, JsonBody};
use crate::dtos::{CompleteSubmissionDTO, CreateSubmissionDTO, SubmissionListDTO};
use crate::entities::Submission;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// GET /vendor1/listsubmissions
#[instrument(skip(state))]
pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SubmissionListDTO>, AppError> {
    debug!("Listing all submissions");
    let submissions = state.submissions.list().await.map_err(|err| {
        AppError::internal_server_error("Unable to retrieve rows").with_details(err.to_string())
    })?;

    info!("Returning {} submissions", submissions.len());
    Ok(Json(SubmissionListDTO { submissions }))
}

/// POST /vendor1/newsubmission
#[instrument(skip(state, body), fields(email = %body.email, topic = %body.topic))]
pub async fn create_submission(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateSubmissionDTO>,
) -> Result<StatusCode, AppError> {
    info!(name = %body.name, status = %body.status, "Received new submission");
    state.submissions.create(&body).await?;
    Ok(StatusCode::OK)
}

/// POST /vendor2/newsubmission
#[instrument(skip(state, body), fields(email = %body.email, topic = %body.topic))]
pub async fn complete_submission(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CompleteSubmissionDTO>,
) -> Result<Json<Submission>, AppError> {
    info!("Received completion for submission");
    let updated = state
        .submissions
        .mark_complete(&body.email, &body.topic)
        .await?;

    match updated {
        0 => warn!("No submission matched email and topic"),
        1 => debug!("One submission marked complete"),
        n => warn!("{} submissions share email and topic, all marked complete", n),
    }

    Ok(Json(body.into_completed()))
}
