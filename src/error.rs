//! Crate-boundary error types.
//!
//! Every operation in this crate maps its failures into [`MentorError`]; the
//! caller is expected to catch it and render a user-facing message. Failures
//! are logged at the point of origin, so the original diagnostic detail stays
//! in the logs even when the surfaced message is generic.

use thiserror::Error;

/// Boxed error type used to preserve an underlying cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the study-notes, image-analysis and chat operations.
#[derive(Debug, Error)]
pub enum MentorError {
    /// The service returned no usable text.
    #[error("the model returned an empty response")]
    EmptyResponse,

    /// The reply text was present but not valid JSON for the declared shape.
    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport or API-level failure.
    ///
    /// `message` is what the caller should show. The underlying error is kept
    /// as `source` even when the message is a fixed generic string, so logs
    /// and tests can still reach the root cause.
    #[error("{message}")]
    Service {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl MentorError {
    /// Parse failure around a serde_json error.
    pub fn parse(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            message: message.into(),
            source,
        }
    }

    /// Service failure with no retained cause (e.g. an API error envelope
    /// that is already the root diagnostic).
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
            source: None,
        }
    }

    /// Service failure that keeps the underlying error as its cause.
    pub fn service_with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Service {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl From<reqwest::Error> for MentorError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request to the generation service timed out".to_string()
        } else if err.is_connect() {
            "could not reach the generation service".to_string()
        } else {
            format!("request to the generation service failed: {err}")
        };
        Self::Service {
            message,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn service_with_source_preserves_cause() {
        let inner = std::io::Error::other("connection reset");
        let err = MentorError::service_with_source("generic message", inner);

        assert_eq!(err.to_string(), "generic message");
        let cause = err.source().expect("cause must be preserved");
        assert!(cause.to_string().contains("connection reset"));
    }

    #[test]
    fn parse_error_reports_its_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = MentorError::parse("reply was not valid JSON", json_err);
        assert_eq!(err.to_string(), "reply was not valid JSON");
        assert!(err.source().is_some());
    }
}
