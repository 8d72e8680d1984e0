//! Gemini endpoint and credential configuration.
//!
//! Configuration is resolved once and injected into the clients at
//! construction time; nothing else in the crate reads the environment.

use secrecy::SecretString;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used by all three operations.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini configuration parameters.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key for authentication (securely stored).
    pub api_key: SecretString,
    /// Base URL for the Gemini API.
    pub base_url: String,
    /// Model to use for generation requests.
    pub model: String,
    /// HTTP timeout in seconds.
    pub timeout: Option<u64>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use secrecy::ExposeSecret;
        f.debug_struct("GeminiConfig")
            .field(
                "api_key_present",
                &(!self.api_key.expose_secret().is_empty()),
            )
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Some(30),
        }
    }
}

impl GeminiConfig {
    /// Create a new configuration with the given API key.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Resolve the API key from `GEMINI_API_KEY`.
    ///
    /// A missing key is tolerated: the configuration is built with an empty
    /// key and a single warning is emitted so the absence is observable. The
    /// request itself will then fail with whatever the service returns for
    /// unauthenticated calls.
    pub fn from_env() -> Self {
        match std::env::var(GEMINI_API_KEY_ENV) {
            Ok(key) => Self::new(key),
            Err(_) => {
                tracing::warn!(
                    "{GEMINI_API_KEY_ENV} is not set; requests will be sent without credentials"
                );
                Self::default()
            }
        }
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP timeout in seconds.
    pub const fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
