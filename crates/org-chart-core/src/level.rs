//! Level Parser
//!
//! Each hierarchy cell encodes one business unit as
//! `Name (UnitCode)-LeafCode`, e.g. `Cambridge Investment Research, Inc. (00001)-QV6`.
//!
//! - `Name` is matched non-greedily, so with several parenthesized groups the
//!   unit code comes from the last one before the `-LeafCode` suffix.
//! - `LeafCode` may not contain `-`.
//!
//! Anything else is rejected with the raw text attached; nothing is guessed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::LevelParseError;

/// `Name (UnitCode)-LeafCode`
static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\(([^)]+)\)-([^-]+)$").unwrap());

/// Structured fields of one encoded level string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLevel {
    /// Business unit display name.
    pub name: String,
    /// Code inside the parentheses.
    pub business_unit_code: String,
    /// Code after the final dash.
    pub bebl_code: String,
    /// Input text, unchanged.
    pub raw: String,
}

/// Parse one level cell.
///
/// # Example
///
/// ```
/// use org_chart_core::parse_level;
///
/// let parsed = parse_level(Some("Cambridge Investment Research, Inc. (00001)-QV6")).unwrap();
/// assert_eq!(parsed.name, "Cambridge Investment Research, Inc.");
/// assert_eq!(parsed.business_unit_code, "00001");
/// assert_eq!(parsed.bebl_code, "QV6");
///
/// assert!(parse_level(Some("Acme (123)")).is_err());
/// ```
pub fn parse_level(raw: Option<&str>) -> Result<ParsedLevel, LevelParseError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(LevelParseError::Empty),
    };

    let caps = LEVEL_RE
        .captures(raw)
        .ok_or_else(|| LevelParseError::Malformed {
            raw: raw.to_string(),
        })?;

    Ok(ParsedLevel {
        name: caps[1].trim().to_string(),
        business_unit_code: caps[2].trim().to_string(),
        bebl_code: caps[3].trim().to_string(),
        raw: raw.to_string(),
    })
}

impl FromStr for ParsedLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(Some(s))
    }
}
