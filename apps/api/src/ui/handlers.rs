use axum::{
    extract::{Multipart, State},
    response::Html,
};
use tracing::warn;

use crate::errors::AppError;
use crate::evaluation::pipeline::{evaluate, Submission};
use crate::state::AppState;
use crate::ui::views::{render_index, Outcome};

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(render_index("", Outcome::Idle)?))
}

/// POST /analyze
///
/// Runs one evaluation and re-renders the form with the job description kept.
/// Every pipeline error is shown on the page; only rendering failures escape.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let submission = match Submission::from_multipart(multipart).await {
        Ok(submission) => submission,
        Err(e) => {
            warn!("Rejected form upload: {e}");
            return Ok(Html(render_index("", Outcome::from_error(&e))?));
        }
    };

    let outcome = match evaluate(&submission, state.generator.as_ref()).await {
        Ok(evaluation) => Outcome::evaluated(&evaluation.result)?,
        Err(e) => {
            if e.is_user_input() {
                warn!("Submission rejected: {e}");
            }
            Outcome::from_error(&e)
        }
    };

    Ok(Html(render_index(&submission.job_description, outcome)?))
}
