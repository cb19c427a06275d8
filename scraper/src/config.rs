//! Run configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Public Swiss parliament data API.
pub const DEFAULT_BASE_URL: &str = "https://api.openparldata.ch/v1";

/// Directory the faction files are written to (relative to current dir).
pub const DEFAULT_OUTPUT_DIR: &str = "factions_details";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries per request.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries of connection failures before giving up on a request.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Settings for a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub output_dir: PathBuf,
    pub client: ClientConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            client: ClientConfig::default(),
        }
    }
}
