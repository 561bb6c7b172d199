//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::evaluation::pipeline::{evaluate, Evaluation, Submission};
use crate::state::AppState;

/// POST /api/v1/evaluations
///
/// Multipart form with `job_description` (text) and `resume` (PDF).
/// Returns the typed evaluation, or the error body for the failing stage.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Evaluation>, AppError> {
    let submission = Submission::from_multipart(multipart).await?;
    let evaluation = evaluate(&submission, state.generator.as_ref()).await?;
    Ok(Json(evaluation))
}
