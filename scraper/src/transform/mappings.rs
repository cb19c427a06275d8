//! Static lookups from upstream values to canonical codes.
//!
//! Every function is total: unknown or absent input yields `None`.

use crate::models::LocalizedText;

/// Language used when resolving [`LocalizedText`].
pub const LANGUAGE: &str = "de";

/// Map a German canton name to its two-letter code.
///
/// Both spellings used upstream are accepted for Appenzell and St. Gallen.
pub fn canton_code(name: Option<&str>) -> Option<&'static str> {
    let code = match name? {
        "Aargau" => "AG",
        "Appenzell A.-Rh." | "Appenzell Ausserrhoden" => "AR",
        "Appenzell I.-Rh." | "Appenzell Innerrhoden" => "AI",
        "Basel-Landschaft" => "BL",
        "Basel-Stadt" => "BS",
        "Bern" => "BE",
        "Freiburg" => "FR",
        "Genf" => "GE",
        "Glarus" => "GL",
        "Graubünden" => "GR",
        "Jura" => "JU",
        "Luzern" => "LU",
        "Neuenburg" => "NE",
        "Nidwalden" => "NW",
        "Obwalden" => "OW",
        "Schaffhausen" => "SH",
        "Schwyz" => "SZ",
        "Solothurn" => "SO",
        "St. Gallen" | "Sankt Gallen" => "SG",
        "Tessin" => "TI",
        "Thurgau" => "TG",
        "Uri" => "UR",
        "Waadt" => "VD",
        "Wallis" => "VS",
        "Zug" => "ZG",
        "Zürich" => "ZH",
        _ => return None,
    };
    Some(code)
}

/// Map a parliament sector to its council code.
pub fn council_code(sector: Option<&str>) -> Option<&'static str> {
    match sector? {
        "NR" => Some("N"), // National Council
        "SR" => Some("S"), // Council of States
        _ => None,
    }
}

/// Map a (German) role name to its faction function code.
pub fn faction_function(role: Option<&str>) -> Option<u32> {
    match role? {
        "Mitglied" => Some(1),
        "Präsident/in" => Some(2),
        "Vizepräsident/in" => Some(11),
        _ => None,
    }
}

/// Resolve a localized field to its German text.
///
/// Plain strings are returned unchanged; mappings without a `de` entry
/// resolve to `None`.
pub fn extract_language(value: Option<&LocalizedText>) -> Option<&str> {
    match value? {
        LocalizedText::Plain(text) => Some(text),
        LocalizedText::Localized(map) => map.get(LANGUAGE).map(String::as_str),
    }
}
