//! Build-time configuration for the web client.
//!
//! A client-side bundle has no process environment at runtime, so the API
//! location is baked in when the crate is compiled.

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:5000";
pub const DEFAULT_TOKEN_COOKIE: &str = "token";
pub const DEFAULT_COOKIE_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub token_cookie: String,
    pub cookie_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_string(),
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
        }
    }
}

impl Config {
    /// Defaults, with the API base URL taken from `HBNB_API_URL` if it was set at build time.
    pub fn from_env() -> Self {
        Self::default().with_api_base_url_opt(option_env!("HBNB_API_URL"))
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn with_api_base_url_opt(self, url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => self.with_api_base_url(url),
            None => self,
        }
    }

    /// Joins an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = Config::default().with_api_base_url("http://api.test/v1/");
        assert_eq!(config.endpoint("/places"), "http://api.test/v1/places");
        assert_eq!(config.endpoint("login"), "http://api.test/v1/login");
    }

    #[test]
    fn blank_override_keeps_default_url() {
        let config = Config::default().with_api_base_url_opt(Some("  "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = Config::default().with_api_base_url_opt(Some("http://other"));
        assert_eq!(config.api_base_url, "http://other");
    }
}
