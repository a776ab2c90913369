//! Runtime configuration for the load driver.
//!
//! Deliberately stateless: nothing is read from or written to disk. The
//! target endpoint comes from a flag or the environment, pacing and
//! iteration counts from the command line.

/// Load-driver configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the money API under load.
    pub api_url: String,
}

fn default_api_url() -> String {
    std::env::var("MB_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Config {
    /// Build config, letting an explicit flag override the environment.
    pub fn resolve(api_url_flag: Option<String>) -> Self {
        Self {
            api_url: api_url_flag.unwrap_or_else(default_api_url),
        }
    }

    /// Get the API URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
