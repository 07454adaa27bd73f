use thiserror::Error;

/// Failure of a single upstream call (weather, air quality or chat webhook).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Schema(String),
}

impl ApiError {
    /// HTTP status of the upstream response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
