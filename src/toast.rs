/// Toast notifications raised from failed requests.
use serde::Serialize;
use serde_json::Value;

/// Icon shown next to the toast title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastIcon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub icon: ToastIcon,
    pub position: &'static str,
    pub timer_ms: u64,
    pub progress_bar: bool,
}

impl Toast {
    pub fn new(title: impl Into<String>, icon: ToastIcon) -> Self {
        Self {
            title: title.into(),
            icon,
            position: "top-end",
            timer_ms: 3000,
            progress_bar: true,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, ToastIcon::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, ToastIcon::Error)
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Handles the shapes the server produces:
/// - validation errors: `{"detail": [{"msg": "..."}, ...]}` (first entry wins)
/// - plain detail: `{"detail": "..."}`
/// - a bare JSON string: `"..."`
///
/// Anything else (including non-JSON bodies) is returned trimmed as-is.
pub fn extract_error_message(body: &str) -> String {
    let raw = body.trim();
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return raw.to_string(),
    };

    match value {
        Value::String(msg) => msg,
        Value::Object(ref map) => match map.get("detail") {
            Some(Value::Array(items)) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| raw.to_string()),
            Some(Value::String(msg)) => msg.clone(),
            _ => raw.to_string(),
        },
        other => other.to_string(),
    }
}

/// Build the error toast shown for a failed response.
pub fn response_error_toast(status: u16, body: &str) -> Toast {
    let msg = extract_error_message(body);
    Toast::error(format!("Code {} - {}", status, msg))
}
