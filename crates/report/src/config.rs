//! Reporter configuration.

/// Scoreboard endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Name submitted alongside scores
    pub player: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            player: "anonymous".to_string(),
        }
    }
}

impl ReporterConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        use std::env;

        let base_url = env::var("SNAKE_SCORES_URL")
            .ok()
            .map(|s| normalize_base_url(&s))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::default().base_url);

        let player = env::var("SNAKE_PLAYER")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::default().player);

        Self { base_url, player }
    }

    /// Check if reporting is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("SNAKE_SCORES_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    /// Full URL of the scores resource.
    pub fn scores_url(&self) -> String {
        format!("{}/scores", self.base_url)
    }
}

/// Strip whitespace and any trailing slashes from a configured base URL.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
