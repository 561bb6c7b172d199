//! The evaluation pipeline: validate → extract → prompt → generate → parse.
//!
//! Every stage returns `Result`; nothing is retried. The caller decides how an
//! `AppError` is shown (JSON body for the API, banner for the form).

use axum::extract::Multipart;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::extractor::extract_resume_text;
use crate::evaluation::parser::{parse_evaluation, EvaluationResult};
use crate::evaluation::prompts::build_evaluation_prompt;
use crate::llm_client::TextGenerator;

pub const MISSING_INPUT_WARNING: &str = "Please upload a PDF and fill the job description.";
pub const WRONG_TYPE_WARNING: &str = "The resume must be a PDF document.";

/// Multipart field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// An uploaded resume, held only for the duration of one request.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeUpload {
    fn is_pdf(&self) -> bool {
        let typed_pdf = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"));
        let named_pdf = self
            .file_name
            .as_deref()
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"));
        typed_pdf || named_pdf
    }
}

/// One form submission.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub job_description: String,
    pub resume: Option<ResumeUpload>,
}

impl Submission {
    /// Reads the `job_description` and `resume` fields; other fields are ignored.
    /// A file part with no content counts as no upload.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = Submission::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(JOB_DESCRIPTION_FIELD) => {
                    submission.job_description = field.text().await?;
                }
                Some(RESUME_FIELD) => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        submission.resume = Some(ResumeUpload {
                            file_name,
                            content_type,
                            bytes,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(submission)
    }

    /// Checks the submission can be evaluated. Runs before any extraction or upstream call.
    pub fn validate(&self) -> Result<&ResumeUpload, AppError> {
        let resume = match &self.resume {
            Some(resume) if !self.job_description.trim().is_empty() => resume,
            _ => return Err(AppError::Validation(MISSING_INPUT_WARNING.to_string())),
        };
        if !resume.is_pdf() {
            return Err(AppError::Validation(WRONG_TYPE_WARNING.to_string()));
        }
        Ok(resume)
    }
}

/// A completed evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub result: EvaluationResult,
}

/// Runs the full pipeline for one submission.
pub async fn evaluate(
    submission: &Submission,
    generator: &dyn TextGenerator,
) -> Result<Evaluation, AppError> {
    let resume = submission.validate()?;

    let evaluation_id = Uuid::new_v4();
    let span = tracing::info_span!("evaluation", %evaluation_id);

    async move {
        let resume_text = extract_resume_text(resume.bytes.clone()).await;
        info!(
            "Resume extracted: {} chars; job description: {} chars",
            resume_text.chars().count(),
            submission.job_description.chars().count()
        );

        let prompt = build_evaluation_prompt(&resume_text, &submission.job_description);

        let raw = generator.generate(&prompt).await.map_err(|e| {
            error!("Evaluation call failed: {e}");
            AppError::Upstream(e)
        })?;

        let result = parse_evaluation(&raw).map_err(|e| {
            error!("Evaluation response was not valid JSON: {e}");
            AppError::Parse(e)
        })?;

        info!("Evaluation complete");
        Ok::<_, AppError>(Evaluation {
            evaluation_id,
            evaluated_at: Utc::now(),
            result,
        })
    }
    .instrument(span)
    .await
}
