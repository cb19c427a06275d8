//! High-level run: fetch groups, reconcile the output directory, write factions.
//!
//! # Example
//!
//! ```rust,ignore
//! use faction_scraper::{scrape_factions, ScrapeConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = scrape_factions(&ScrapeConfig::default()).await?;
//!     println!("Wrote {} factions", summary.written);
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::client::ParliamentClient;
use crate::config::ScrapeConfig;
use crate::error::{ScrapeError, ScrapeResult};
use crate::models::{Faction, Group};
use crate::store::FactionStore;
use crate::transform::{assemble_members, extract_language};

/// Outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Faction files written.
    pub written: usize,
    /// Stale faction files deleted.
    pub removed: usize,
    /// Groups skipped for lack of an external id.
    pub skipped: usize,
}

/// Scrape all factions into `config.output_dir`.
///
/// This is the main entry point. It:
/// 1. Ensures the output directory exists
/// 2. Opens one HTTP client for the whole run
/// 3. Runs [`scrape_with`]
///
/// The client is dropped, and its connections closed, on every exit path.
pub async fn scrape_factions(config: &ScrapeConfig) -> ScrapeResult<ScrapeSummary> {
    let store = FactionStore::open(&config.output_dir)?;
    let client = ParliamentClient::new(&config.client)?;

    scrape_with(&client, &store).await
}

/// Scrape all factions with an existing client and store.
///
/// Aborts with [`ScrapeError::NoGroups`] before touching any file when the
/// API reports no active group.
pub async fn scrape_with(
    client: &ParliamentClient,
    store: &FactionStore,
) -> ScrapeResult<ScrapeSummary> {
    info!("Fetching active parliamentary groups...");
    let groups = client.fetch_groups().await?;

    if groups.is_empty() {
        error!("API returned 0 faction IDs. Aborting to prevent data loss.");
        return Err(ScrapeError::NoGroups);
    }

    let faction_ids: HashSet<String> = groups
        .iter()
        .filter_map(external_id)
        .map(String::from)
        .collect();
    info!(count = faction_ids.len(), "Faction IDs from API");

    let mut summary = ScrapeSummary {
        removed: store.remove_stale(&faction_ids)?,
        ..ScrapeSummary::default()
    };

    for group in &groups {
        let Some(faction_id) = external_id(group) else {
            warn!(group_id = group.id, "Skipping group: missing external_alternative_id");
            summary.skipped += 1;
            continue;
        };

        info!(faction_id, group_id = group.id, "Fetching memberships");
        let faction = build_faction(client, group, faction_id).await?;

        let path = store.write(faction_id, &faction)?;
        info!(
            faction_id,
            members = faction.members.len(),
            path = %path.display(),
            "Saved faction"
        );
        summary.written += 1;
    }

    info!(
        written = summary.written,
        removed = summary.removed,
        skipped = summary.skipped,
        "Finished fetching all faction details"
    );
    Ok(summary)
}

/// Fetch the memberships of one group and assemble its faction.
async fn build_faction(
    client: &ParliamentClient,
    group: &Group,
    faction_id: &str,
) -> ScrapeResult<Faction> {
    let id = faction_id
        .trim()
        .parse::<i64>()
        .map_err(|_| ScrapeError::InvalidFactionId {
            group_id: group.id,
            value: faction_id.to_string(),
        })?;

    let abbreviation = extract_language(Some(&group.abbreviation)).unwrap_or_default();
    let name = extract_language(Some(&group.name)).unwrap_or_default();

    let memberships = client.fetch_memberships(group.id).await?;
    let members = assemble_members(&memberships, abbreviation, name);

    Ok(Faction::new(id, abbreviation.to_string(), name.to_string(), members))
}

/// External id of a group, if present and non-empty.
fn external_id(group: &Group) -> Option<&str> {
    group
        .external_alternative_id
        .as_deref()
        .filter(|id| !id.is_empty())
}
