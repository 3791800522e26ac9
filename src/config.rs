use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub const DEFAULT_API_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Public rate-limited key accepted by api.nasa.gov.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Runtime settings. Only the key and endpoint come from the environment;
/// everything else is a compiled-in constant.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: Url,
    /// Time between automatic refreshes.
    pub refresh_interval: Duration,
    /// Attempts per load cycle before giving up until the next tick.
    pub max_attempts: u32,
    /// Pause between two failed attempts of the same cycle.
    pub retry_delay: Duration,
    /// Refresh delay used after a cycle ran out of attempts.
    pub exhausted_backoff: Duration,
    /// Bounding box for the displayed image (width, height).
    pub image_bounds: (u32, u32),
    pub http_timeout: Duration,
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = ["APOD_API_KEY", "NASA_API_KEY"]
            .iter()
            .filter_map(|k| lookup(k))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .unwrap_or_else(|| {
                log::warn!("APOD_API_KEY not set, falling back to {DEMO_API_KEY}");
                DEMO_API_KEY.to_string()
            });

        let raw_url = lookup("APOD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim())
            .with_context(|| format!("APOD_API_URL '{raw_url}' is not a valid URL"))?;

        Ok(Config {
            api_key,
            api_url,
            refresh_interval: Duration::from_secs(300),
            max_attempts: 10,
            retry_delay: Duration::from_millis(500),
            exhausted_backoff: Duration::from_secs(30),
            image_bounds: (800, 350),
            http_timeout: Duration::from_secs(20),
        })
    }
}
