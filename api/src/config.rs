//! Backend base URL configuration from environment variables.

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the ClubHub backend lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Config with an explicit base URL. A trailing slash is stripped so
    /// paths can always be joined as `"{base_url}{path}"`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read `CLUBHUB_API_URL` from the environment, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("CLUBHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
