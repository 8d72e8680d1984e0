//! HTTP client for the Generative Language API.

use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::debug;

use crate::config::GeminiConfig;
use crate::error::MentorError;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Google API error envelope: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
}

/// Thin client around one `reqwest::Client`.
///
/// Each operation in this crate constructs its own `GeminiClient`; there is no
/// shared client instance and no state across calls.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: HttpClient,
}

impl GeminiClient {
    /// Create a new client from the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(timeout));
        }
        // Builder failure here means a broken TLS backend; fall back to the
        // default client rather than making construction fallible.
        let http = builder.build().unwrap_or_default();
        Self { config, http }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Issue one blocking generateContent call.
    ///
    /// Non-2xx responses are decoded against the Google error envelope and
    /// surfaced as [`MentorError::Service`] with the API-provided message when
    /// present.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, MentorError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        debug!(model = %self.config.model, "sending generateContent request");

        let mut builder = self.http.post(&url).json(request);
        let api_key = self.config.api_key.expose_secret();
        if !api_key.is_empty() {
            builder = builder.header("x-goog-api-key", api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let envelope_message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| {
                    debug!(code = ?envelope.error.code, "service returned an error envelope");
                    envelope.error.message
                });
            // A service-provided message stands on its own; a synthesized one
            // keeps the raw status and body as the cause so callers can tell
            // the two apart.
            return Err(match envelope_message {
                Some(message) => MentorError::service(message),
                None => MentorError::service_with_source(
                    format!("HTTP {status}"),
                    format!("HTTP {status}: {body}"),
                ),
            });
        }

        let response = response.json::<GenerateContentResponse>().await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_decodes_google_error_shape() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, Some(400));
        assert_eq!(envelope.error.message.as_deref(), Some("API key not valid"));
    }

    #[test]
    fn client_debug_does_not_leak_the_key() {
        let client = GeminiClient::new(GeminiConfig::new("top-secret"));
        assert!(!format!("{client:?}").contains("top-secret"));
    }
}
