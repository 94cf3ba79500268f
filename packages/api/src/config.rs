/// Client configuration.
///
/// The default base URL targets a local backend and already carries the
/// API version prefix. Builds for another environment override it with the
/// `API_URL` environment variable at compile time.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("API_URL")
                .unwrap_or("http://localhost:8080/v1")
                .to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
