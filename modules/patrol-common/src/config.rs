use std::env;

/// Default whitelist applied when a scan request supplies none.
pub const DEFAULT_WHITELIST: &str = "twitter.com, pixiv.net";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SerpApi key. `None` selects demo mode (mock fixture); this is a
    /// normal operating condition, not a misconfiguration.
    pub serpapi_key: Option<String>,

    /// Whitelist applied when a scan request supplies none.
    pub default_whitelist: String,

    // Web server
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from environment variables. Only the bind
    /// address needs a value; everything else has a working default.
    pub fn from_env() -> Self {
        Self {
            serpapi_key: optional_env("SERPAPI_KEY"),
            default_whitelist: env::var("DEFAULT_WHITELIST")
                .unwrap_or_else(|_| DEFAULT_WHITELIST.to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("API_PORT must be a number"),
        }
    }
}

/// Read an env var, treating absent and blank values the same way.
pub fn optional_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Read an env var that must be present.
/// Panics with a clear message if it is missing.
pub fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::parse_whitelist;

    #[test]
    fn default_whitelist_covers_the_two_legitimate_hosts() {
        assert_eq!(
            parse_whitelist(DEFAULT_WHITELIST),
            vec!["twitter.com".to_string(), "pixiv.net".to_string()]
        );
    }
}

