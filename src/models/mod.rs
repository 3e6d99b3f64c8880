use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-text fields of the idea form.
///
/// The receiving Apps Script reads camelCase keys; `college` is the
/// organization field.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub college: String,
    pub subject: String,
    pub message: String,
}

/// One encoded file as it travels on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,

    #[serde(rename = "type")]
    pub mime_type: String,

    /// Standard Base64 (padded), without a data-URL prefix.
    pub content: String,
}

/// Body of the submission POST. Built fresh for every attempt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormPayload {
    #[serde(flatten)]
    pub fields: FormFields,

    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,

    pub files: Vec<Attachment>,
}

/// Reply from the submission endpoint.
///
/// `success` has been observed as a bool, a number and a string, so it is
/// kept loose and read with JavaScript truthiness. `error` is equally loose.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: Value,

    #[serde(default)]
    pub error: Value,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        is_truthy(&self.success)
    }

    /// Server-provided reason, falling back to a generic message when the
    /// reported error is falsy.
    pub fn failure_message(&self) -> String {
        match &self.error {
            Value::String(s) if !s.is_empty() => s.clone(),
            other if is_truthy(other) => other.to_string(),
            _ => "Submission failed".to_string(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
