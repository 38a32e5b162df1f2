//! Error types for the visualizer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hanoi_core::HanoiError;
use serde::Serialize;
use thiserror::Error;

/// Result type for visualizer operations.
pub type Result<T> = std::result::Result<T, VisError>;

/// Errors that can occur while configuring or serving the visualizer.
#[derive(Debug, Error)]
pub enum VisError {
    /// Rejected puzzle input
    #[error(transparent)]
    Puzzle(#[from] HanoiError),

    /// Invalid configuration value
    #[error("Invalid configuration: {name}={value:?}: {reason}")]
    Config {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// WebSocket transport error
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] axum::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            VisError::Puzzle(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for VisError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::DiskCount;

    #[test]
    fn puzzle_errors_are_bad_requests() {
        let err = VisError::from(DiskCount::new(0).unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Please enter a value between 1 and 8");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_errors_are_server_errors() {
        let err = VisError::Config {
            name: "HANOI_VIS_ADDR",
            value: "nowhere".into(),
            reason: "invalid socket address syntax".into(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("HANOI_VIS_ADDR"));
    }
}
