//! Decoding of paginated API payloads.
//!
//! Every list endpoint answers with the same envelope:
//!
//! ```json
//! { "data": [ ... ], "meta": { "has_more": true } }
//! ```
//!
//! Decoding is strict: a missing `data` or `meta.has_more`, or a record that
//! does not match its model, fails the whole page with a [`DecodeError`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::models::{Group, Membership};

/// Pagination metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    pub has_more: bool,
}

/// One decoded page of records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.meta.has_more
    }
}

/// Page of `GET /groups/`.
pub type GroupPage = Page<Group>;

/// Page of `GET /memberships/`.
pub type MembershipPage = Page<Membership>;

/// Decode a raw response body into a typed page.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, DecodeError> {
    Ok(serde_json::from_str(body)?)
}
