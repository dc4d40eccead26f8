//! Converts transport failures and error responses into `AnalyzerError`.

use serde::Deserialize;

use crate::api::error::AnalyzerError;

const MAX_ERROR_BODY_CHARS: usize = 160;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub(super) fn map_transport_error(error: &reqwest::Error) -> AnalyzerError {
    let kind = if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };

    AnalyzerError::Network {
        message: format!("{kind}: {error}"),
    }
}

pub(super) fn map_decode_error(error: &serde_json::Error) -> AnalyzerError {
    AnalyzerError::MalformedResponse {
        message: error.to_string(),
    }
}

/// Builds an API error from a non-success status and its raw body.
///
/// Bodies shaped like `{"error": "..."}` contribute just the message;
/// anything else is included verbatim, truncated for display.
pub(super) fn map_status_error(status: u16, body: Option<&str>) -> AnalyzerError {
    let message = match body {
        None => "(failed to read error response body)".to_owned(),
        Some(raw) if raw.trim().is_empty() => "(empty response body)".to_owned(),
        Some(raw) => serde_json::from_str::<ErrorBody>(raw).map_or_else(
            |_| truncate_for_message(raw.trim(), MAX_ERROR_BODY_CHARS),
            |parsed| truncate_for_message(parsed.error.as_str(), MAX_ERROR_BODY_CHARS),
        ),
    };

    AnalyzerError::Api { status, message }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}
