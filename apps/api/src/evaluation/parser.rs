//! Typed parse of the model's evaluation output.

use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;

/// Structured ATS evaluation. Keys the model leaves out stay `None` and are omitted on output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    #[serde(rename = "JD Match", default, skip_serializing_if = "Option::is_none")]
    pub jd_match: Option<String>,
    #[serde(
        rename = "MissingKeywords",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub missing_keywords: Option<Vec<String>>,
    #[serde(
        rename = "Profile Summary",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_summary: Option<String>,
}

/// Parses the raw response after trimming surrounding whitespace.
///
/// Prose or code fences around the JSON are a parse failure, not something to repair.
/// Only a JSON object is accepted; arrays and scalars fail even when they would fill the
/// fields by position.
pub fn parse_evaluation(raw: &str) -> Result<EvaluationResult, serde_json::Error> {
    match serde_json::from_str::<Value>(raw.trim())? {
        Value::Object(fields) => serde_json::from_value(Value::Object(fields)),
        _ => Err(serde_json::Error::custom("expected a JSON object")),
    }
}
