//! Domain models for the faction scraper.
//!
//! Upstream records (decoded from the API):
//!
//! - [`Group`] - Parliamentary group
//! - [`Membership`] - Link between a group and a person
//! - [`Person`] - Person data embedded in a membership
//! - [`LocalizedText`] - Either a plain string or a language → text mapping
//!
//! Output records (written to disk):
//!
//! - [`Faction`] - One group with all its members
//! - [`Member`] - Flattened, canonicalized membership + person

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Localized Text
// =============================================================================

/// A text field the API returns either as a plain string or per language.
///
/// ```json
/// "Bern"
/// { "de": "Genf", "fr": "Genève", "it": "Ginevra" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Untranslated value.
    Plain(String),
    /// Language code → text.
    Localized(BTreeMap<String, String>),
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedText {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self::Localized(
            entries
                .into_iter()
                .map(|(lang, text)| (lang.to_string(), text.to_string()))
                .collect(),
        )
    }
}

// =============================================================================
// Upstream Records
// =============================================================================

/// Parliamentary group as returned by `GET /groups/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    /// Internal API id, used to query memberships.
    pub id: i64,
    /// Stable external id, used for file naming.
    #[serde(default)]
    pub external_alternative_id: Option<String>,
    pub abbreviation: LocalizedText,
    pub name: LocalizedText,
    pub active: bool,
}

/// Person embedded in a membership (`expand=person`).
///
/// Every field is optional upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Person {
    pub id: Option<i64>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Numeric person number, transmitted as a string.
    pub external_alternative_id: Option<String>,
    pub electoral_district: Option<LocalizedText>,
    /// `NR` (National Council) or `SR` (Council of States).
    pub parliament_sector: Option<String>,
    pub party: Option<LocalizedText>,
    pub party_harmonized: Option<LocalizedText>,
    pub gender: Option<String>,
}

/// Wrapper around the expanded person list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonList {
    pub data: Vec<Person>,
}

/// Membership as returned by `GET /memberships/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Membership {
    pub person: PersonList,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub role_name: Option<LocalizedText>,
}

impl Membership {
    /// The authoritative person of this membership (first of the list).
    pub fn person(&self) -> Option<&Person> {
        self.person.data.first()
    }
}

// =============================================================================
// Output Records
// =============================================================================

/// One member of a faction, as written to the output file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Person number parsed from the external alternative id.
    pub number: Option<i64>,
    /// Party name as reported.
    pub party: Option<String>,
    /// Harmonized party name.
    pub party_name: Option<String>,
    /// Abbreviation of the enclosing faction.
    pub faction: String,
    /// Name of the enclosing faction.
    pub faction_name: String,
    /// Council code (`N` or `S`).
    pub council: Option<String>,
    /// Two-letter canton code.
    pub canton: Option<String>,
    pub canton_name: Option<String>,
    pub gender: Option<String>,
    pub active: Option<bool>,
    /// 1 = member, 2 = president, 11 = vice president.
    pub faction_function: Option<u32>,
    // Reserved, always null.
    pub code: Option<String>,
    pub official_denomination: Option<String>,
    pub salutation_letter: Option<String>,
    pub salutation_title: Option<String>,
}

/// A faction with all its members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    /// External alternative id of the source group.
    pub id: i64,
    pub abbreviation: String,
    /// Synthesized code, `FRA_<id>_`.
    pub code: String,
    pub name: String,
    /// Display name, `Fraktion <abbreviation>`.
    pub short_name: String,
    pub members: Vec<Member>,
}

impl Faction {
    /// Build a faction, synthesizing `code` and `short_name`.
    pub fn new(id: i64, abbreviation: String, name: String, members: Vec<Member>) -> Self {
        Self {
            id,
            code: format!("FRA_{id}_"),
            short_name: format!("Fraktion {abbreviation}"),
            abbreviation,
            name,
            members,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
