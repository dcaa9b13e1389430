use std::env;
use std::time::Duration;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_url: Option<String>,
    pub upstream_token: Option<String>,
    pub upstream_timeout: Option<Duration>,
    pub cache_max_entries: Option<usize>,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 3005;

    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);

        // Empty values count as unset
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let upstream_url = non_empty("VIGNETTES_API_URL");
        let upstream_token = non_empty("VIGNETTES_API_TOKEN");

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let cache_max_entries = lookup("CACHE_MAX_ENTRIES").and_then(|s| s.parse().ok());

        Self {
            port,
            upstream_url,
            upstream_token,
            upstream_timeout,
            cache_max_entries,
        }
    }

    /// Both the backend URL and its token are present
    pub fn upstream_configured(&self) -> bool {
        self.upstream_url.is_some() && self.upstream_token.is_some()
    }
}
