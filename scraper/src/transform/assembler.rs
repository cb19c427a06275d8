//! Assemble output members from upstream memberships.
//!
//! # Architecture
//!
//! ```text
//! Membership ──┬── person.data[0] ──▶ identity, gender, number
//!              │                  ──▶ district ─▶ canton / cantonName
//!              │                  ──▶ sector   ─▶ council
//!              │                  ──▶ party, party_harmonized
//!              └── role_name ───────▶ factionFunction
//!                                         │
//!                      faction abbr/name ─┴──▶ Member
//! ```

use tracing::debug;

use super::mappings::{canton_code, council_code, extract_language, faction_function};
use crate::models::{Member, Membership, Person};

/// Build the members of one faction.
///
/// Memberships without an expanded person are skipped. Order is preserved.
pub fn assemble_members(
    memberships: &[Membership],
    faction_abbr: &str,
    faction_name: &str,
) -> Vec<Member> {
    memberships
        .iter()
        .filter_map(|membership| assemble_member(membership, faction_abbr, faction_name))
        .collect()
}

/// Build one member, or `None` if the membership carries no person.
pub fn assemble_member(
    membership: &Membership,
    faction_abbr: &str,
    faction_name: &str,
) -> Option<Member> {
    let person = membership.person()?;

    let canton_name = extract_language(person.electoral_district.as_ref());
    let role_name = extract_language(membership.role_name.as_ref());

    Some(Member {
        id: person.id,
        first_name: person.firstname.clone(),
        last_name: person.lastname.clone(),
        number: person_number(person),
        party: extract_language(person.party.as_ref()).map(String::from),
        party_name: extract_language(person.party_harmonized.as_ref()).map(String::from),
        faction: faction_abbr.to_string(),
        faction_name: faction_name.to_string(),
        council: council_code(person.parliament_sector.as_deref()).map(String::from),
        canton: canton_code(canton_name).map(String::from),
        canton_name: canton_name.map(String::from),
        gender: person.gender.clone(),
        active: membership.active,
        faction_function: faction_function(role_name),
        code: None,
        official_denomination: None,
        salutation_letter: None,
        salutation_title: None,
    })
}

/// Parse the person number; anything that is not an integer yields `None`.
fn person_number(person: &Person) -> Option<i64> {
    let raw = person.external_alternative_id.as_deref()?;
    match raw.trim().parse() {
        Ok(number) => Some(number),
        Err(e) => {
            debug!(
                person_id = ?person.id,
                value = raw,
                error = %e,
                "Ignoring non-numeric person number"
            );
            None
        }
    }
}
