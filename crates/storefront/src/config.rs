//! Storefront configuration.

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "STYLEHUB_API_URL";

/// Backend base URL used when no override is set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    api_url: String,
}

impl StorefrontConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get API URL from environment or use default.
    pub fn from_env() -> Self {
        Self::resolve(env_override())
    }

    /// Pick the override when it is set and non-blank, else the local default.
    pub fn resolve(api_url_override: Option<String>) -> Self {
        match api_url_override {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Absolute URL of an endpoint path such as `/products`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_override() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

// No process environment in the browser; the override is baked in at build time.
#[cfg(target_arch = "wasm32")]
fn env_override() -> Option<String> {
    option_env!("STYLEHUB_API_URL").map(str::to_string)
}
