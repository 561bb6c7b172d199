use askama::Template;

use crate::errors::AppError;
use crate::evaluation::parser::EvaluationResult;

/// What the page shows under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Warning(String),
    /// Pretty-printed evaluation JSON.
    Evaluated(String),
    /// Single-line failure description, shown after the error marker.
    Failed(String),
}

impl Outcome {
    pub fn evaluated(result: &EvaluationResult) -> Result<Self, AppError> {
        let json = serde_json::to_string_pretty(result)
            .map_err(|e| AppError::Internal(e.into()))?;
        Ok(Outcome::Evaluated(json))
    }

    /// Input errors become a warning; anything else is a failure banner.
    pub fn from_error(err: &AppError) -> Self {
        if err.is_user_input() {
            Outcome::Warning(err.to_string())
        } else {
            Outcome::Failed(err.to_string().split_whitespace().collect::<Vec<_>>().join(" "))
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub job_description: &'a str,
    pub outcome: Outcome,
}

pub fn render_index(job_description: &str, outcome: Outcome) -> Result<String, AppError> {
    IndexPage {
        job_description,
        outcome,
    }
    .render()
    .map_err(|e| AppError::Internal(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_idle_page_has_form_controls() {
        let html = render_index("", Outcome::Idle).unwrap();
        assert!(html.contains("<title>Smart ATS</title>"));
        assert!(html.contains("Smart ATS Resume Checker"));
        assert!(html.contains(r#"name="job_description""#));
        assert!(html.contains(r#"name="resume" type="file" accept=".pdf,application/pdf""#));
        assert!(html.contains("Analyze</button>"));
        assert!(!html.contains("role=\"alert\""));
        assert!(!html.contains("evaluated successfully"));
    }

    #[test]
    fn test_evaluated_page_shows_all_fields() {
        let result = EvaluationResult {
            jd_match: Some("82%".into()),
            missing_keywords: Some(vec!["Docker".into(), "Kubernetes".into()]),
            profile_summary: Some("Experienced backend engineer.".into()),
        };
        let html = render_index("JD", Outcome::evaluated(&result).unwrap()).unwrap();
        assert!(html.contains("✅ Resume evaluated successfully."));
        assert!(html.contains("&quot;JD Match&quot;: &quot;82%&quot;"));
        assert!(html.contains("&quot;Docker&quot;"));
        assert!(html.contains("&quot;Kubernetes&quot;"));
        assert!(html.contains("Experienced backend engineer."));
    }

    #[test]
    fn test_user_input_errors_become_warnings() {
        let outcome = Outcome::from_error(&AppError::Validation("fill the form".into()));
        assert_eq!(outcome, Outcome::Warning("fill the form".into()));
    }

    #[test]
    fn test_failures_are_single_line() {
        let err = AppError::Upstream(LlmError::Api {
            status: 500,
            message: "line one\nline two".into(),
        });
        let Outcome::Failed(message) = Outcome::from_error(&err) else {
            panic!("expected a failure outcome");
        };
        assert_eq!(
            message,
            "Evaluation request failed: API error (status 500): line one line two"
        );

        let html = render_index("", Outcome::Failed(message)).unwrap();
        assert!(html.contains("❌ Error: Evaluation request failed"));
    }

    #[test]
    fn test_job_description_is_preserved_and_escaped() {
        let html = render_index("<script>alert(1)</script>", Outcome::Idle).unwrap();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
        assert!(!html.contains("<script>alert(1)"));
    }
}
