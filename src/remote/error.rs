//! Conversion of unsuccessful backend responses into desk errors.

use crate::error::DeskError;

/// Longest slice of a response body kept in an error message
const MAX_BODY_IN_MESSAGE: usize = 200;

/// Build an error from a non-success response.
///
/// The body is consumed so the backend's own explanation, if any, ends up in
/// the diagnostics. Spring-style `{"message": ...}` / `{"error": ...}` bodies
/// are unwrapped; anything else is kept verbatim (truncated).
pub async fn error_from_response(response: reqwest::Response) -> DeskError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    DeskError::Api {
        status,
        message: summarize_body(status, &body),
    }
}

fn summarize_body(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str())
                && !text.is_empty()
            {
                return text.to_string();
            }
        }
    }

    truncate(body, MAX_BODY_IN_MESSAGE)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_summarize_empty_body_uses_reason() {
        assert_eq!(summarize_body(StatusCode::NOT_FOUND, ""), "Not Found");
        assert_eq!(summarize_body(StatusCode::FORBIDDEN, "   "), "Forbidden");
    }

    #[test]
    fn test_summarize_json_message() {
        let body = r#"{"timestamp":"2024-01-01","status":500,"error":"Internal Server Error","message":"Ticket not found with id: 9"}"#;
        assert_eq!(
            summarize_body(StatusCode::INTERNAL_SERVER_ERROR, body),
            "Ticket not found with id: 9"
        );
    }

    #[test]
    fn test_summarize_json_error_only() {
        let body = r#"{"error":"Forbidden"}"#;
        assert_eq!(summarize_body(StatusCode::FORBIDDEN, body), "Forbidden");
    }

    #[test]
    fn test_summarize_plain_text_is_truncated() {
        let body = "x".repeat(500);
        let summary = summarize_body(StatusCode::BAD_GATEWAY, &body);
        assert_eq!(summary.chars().count(), MAX_BODY_IN_MESSAGE + 3);
        assert!(summary.ends_with("..."));
    }
}
