//! # Faction Scraper - Swiss parliamentary factions to JSON
//!
//! Fetches the parliamentary groups of the Federal Assembly and their
//! memberships from the OpenParlData API, canonicalizes coded and localized
//! fields, and writes one JSON file per faction.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  REST API   │────▶│   Client    │────▶│  Transform  │────▶│    Store    │
//! │ (paginated) │     │  + Parser   │     │ (mappings)  │     │ (JSON/file) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use faction_scraper::{scrape_factions, ScrapeConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let summary = scrape_factions(&ScrapeConfig::default()).await.unwrap();
//!     println!("Wrote {} factions", summary.written);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Run and client settings
//! - [`models`] - Upstream and output records
//! - [`parser`] - Page decoding
//! - [`client`] - Paginated API client
//! - [`transform`] - Field mappings and member assembly
//! - [`store`] - Faction files on disk
//! - [`pipeline`] - Run orchestration
//! - [`logs`] - Tracing subscriber setup

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Upstream
pub mod client;
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod pipeline;
pub mod store;

pub mod logs;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ClientError, DecodeError, ScrapeError};

// =============================================================================
// Re-exports - Config
// =============================================================================

pub use config::{ClientConfig, ScrapeConfig};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Faction, Group, LocalizedText, Member, Membership, Person, PersonList};

// =============================================================================
// Re-exports - Client & Parser
// =============================================================================

pub use client::{ParliamentClient, PAGE_SIZE};
pub use parser::{decode_page, Meta, Page};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    assemble_member,
    assemble_members,
    canton_code,
    council_code,
    extract_language,
    faction_function,
};

// =============================================================================
// Re-exports - Pipeline & Store
// =============================================================================

pub use pipeline::{scrape_factions, scrape_with, ScrapeSummary};
pub use store::FactionStore;
