use crate::models::FormFields;
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn now_iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

// Per-field checks below are kept for the contact form but are not called
// from any event handler yet.

pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// Element ids of blank fields, in form order.
pub fn missing_required_fields(fields: &FormFields) -> Vec<&'static str> {
    [
        ("fullName", &fields.full_name),
        ("email", &fields.email),
        ("college", &fields.college),
        ("subject", &fields.subject),
        ("message", &fields.message),
    ]
    .into_iter()
    .filter(|(_, v)| v.trim().is_empty())
    .map(|(id, _)| id)
    .collect()
}

/// Border classes for a form control, swapping the focus ring for the error
/// border when invalid.
pub fn field_class(invalid: bool) -> &'static str {
    if invalid {
        "border-red-500"
    } else {
        "focus:border-primary"
    }
}
