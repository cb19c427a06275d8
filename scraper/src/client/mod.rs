//! Client for the Swiss parliament data API.
//!
//! Both list endpoints share the same pagination protocol: `offset`/`limit`
//! query parameters, and a `meta.has_more` flag in every page.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use faction_scraper::{ClientConfig, ParliamentClient};
//!
//! let client = ParliamentClient::new(&ClientConfig::default())?;
//! let groups = client.fetch_groups().await?;
//! for group in &groups {
//!     let memberships = client.fetch_memberships(group.id).await?;
//! }
//! ```

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Group, Membership};
use crate::parser::{decode_page, GroupPage, MembershipPage, Page};

/// Records requested per page.
pub const PAGE_SIZE: usize = 1000;

/// Harmonized group type of parliamentary factions.
const FACTION_TYPE_ID: u32 = 4;

/// Federal parliament.
const BODY_KEY: &str = "CHE";

/// Base delay between connection retries; doubles after the second retry.
const RETRY_DELAY_MS: u64 = 500;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/58.0.3029.110 Safari/537.36";

/// Parliament API client.
///
/// Holds one connection pool for the whole run; connections are closed
/// when the client is dropped.
#[derive(Debug, Clone)]
pub struct ParliamentClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl ParliamentClient {
    /// Create a client with the given timeout, retries and base URL.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all active parliamentary groups.
    ///
    /// Any transport or decode error fails the whole fetch: a partial group
    /// list would make the caller delete valid faction files.
    pub async fn fetch_groups(&self) -> ClientResult<Vec<Group>> {
        let filters = [
            ("type_harmonized_id", FACTION_TYPE_ID.to_string()),
            ("body_key", BODY_KEY.to_string()),
        ];

        let mut groups = Vec::new();
        let mut offset = 0;

        loop {
            let page: GroupPage = self.get_page("groups", &filters, offset).await?;
            let has_more = page.has_more();
            debug!(offset, count = page.data.len(), has_more, "Fetched groups page");

            groups.extend(page.data.into_iter().filter(|group| group.active));

            if !has_more {
                break;
            }
            offset += PAGE_SIZE;
        }

        Ok(groups)
    }

    /// Fetch the memberships of one group, with expanded person data.
    ///
    /// A transport failure stops pagination and returns the pages fetched so
    /// far; one unreachable group must not abort the run. Decode errors are
    /// returned.
    pub async fn fetch_memberships(&self, group_id: i64) -> ClientResult<Vec<Membership>> {
        let filters = [
            ("group_id", group_id.to_string()),
            ("expand", "person".to_string()),
        ];

        let mut memberships = Vec::new();
        let mut offset = 0;

        loop {
            let result: ClientResult<MembershipPage> =
                self.get_page("memberships", &filters, offset).await;
            let page = match result {
                Ok(page) => page,
                Err(e) if e.is_transport() => {
                    warn!(
                        group_id,
                        offset,
                        kept = memberships.len(),
                        error = %e,
                        "Failed to fetch memberships, continuing with what was fetched"
                    );
                    break;
                }
                Err(e) => return Err(e),
            };

            let has_more = page.has_more();
            debug!(
                group_id,
                offset,
                count = page.data.len(),
                has_more,
                "Fetched memberships page"
            );

            memberships.extend(page.data);

            if !has_more {
                break;
            }
            offset += PAGE_SIZE;
        }

        Ok(memberships)
    }

    /// GET one page of `resource` and decode it.
    async fn get_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        filters: &[(&str, String)],
        offset: usize,
    ) -> ClientResult<Page<T>> {
        let url = format!("{}/{}/", self.base_url, resource);

        let mut query = filters.to_vec();
        query.push(("offset", offset.to_string()));
        query.push(("limit", PAGE_SIZE.to_string()));

        let body = self.get_with_retries(&url, &query).await?;

        decode_page(&body).map_err(|source| ClientError::Decode { url, source })
    }

    /// GET `url`, retrying connection failures up to `max_retries` times.
    ///
    /// Waits [`retry_delay`] before each retry.
    async fn get_with_retries(&self, url: &str, query: &[(&str, String)]) -> ClientResult<String> {
        let mut attempt = 0;

        loop {
            match self.http.get(url).query(query).send().await {
                Ok(response) => return read_body(url, response).await,
                Err(e) if e.is_connect() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = retry_delay(attempt);
                    debug!(
                        url,
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Connection failed, retrying"
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                Err(source) => {
                    return Err(ClientError::Transport {
                        url: url.to_string(),
                        source,
                    })
                }
            }
        }
    }
}

/// Delay before retry number `attempt` (1-based): none, then 500 ms, 1 s, 2 s...
fn retry_delay(attempt: u32) -> Duration {
    match attempt {
        0 | 1 => Duration::ZERO,
        n => Duration::from_millis(RETRY_DELAY_MS << (n - 2).min(16)),
    }
}

/// Check the status and read the body as text.
async fn read_body(url: &str, response: reqwest::Response) -> ClientResult<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| ClientError::Transport {
        url: url.to_string(),
        source,
    })
}
