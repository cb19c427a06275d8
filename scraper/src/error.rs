//! Error types for the faction scraper.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`DecodeError`] - Upstream payload does not match the expected shape
//! - [`ClientError`] - HTTP client errors (transport, status, decode)
//! - [`ScrapeError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Field-level parse failures (e.g. a non-numeric person number) are not
//! represented here: they are always recovered where they happen.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Decode Errors
// =============================================================================

/// A payload that is not JSON or does not match the expected page shape.
#[derive(Debug, Error)]
#[error("Malformed payload: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

// =============================================================================
// HTTP Client Errors
// =============================================================================

/// Errors from the upstream API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be decoded.
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: DecodeError,
    },
}

impl ClientError {
    /// Whether this is a transport-level failure (as opposed to a decode failure).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }
}

// =============================================================================
// Scrape Errors (top-level)
// =============================================================================

/// Top-level run errors.
///
/// This is the error type returned by [`crate::pipeline::scrape_factions`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Upstream API error.
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Upstream returned no active groups; nothing is written or deleted.
    #[error("API returned 0 factions, aborting to prevent data loss")]
    NoGroups,

    /// Filesystem error on the output directory.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Faction could not be serialized.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Group external id is present but not an integer.
    #[error("Group {group_id} has a non-numeric external id '{value}'")]
    InvalidFactionId { group_id: i64, value: String },
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type for run-level operations.
pub type ScrapeResult<T> = Result<T, ScrapeError>;
