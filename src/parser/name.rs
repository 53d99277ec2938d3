use crate::constants::default_excluded_names;
use once_cell::sync::Lazy;
use regex::Regex;

// "<catalog or constellation> - Name": the dash form wins so a capitalized
// prefix is never mistaken for the name.
static DASH_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\s*([A-Z][a-z]{3,})$").expect("dash name pattern is valid"));

static TRAILING_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]{3,})$").expect("trailing name pattern is valid"));

/// Pull the candidate proper name out of an Inkscape label.
///
/// Labels follow two conventions on the chart, `HD12345 - Vega` and a bare
/// `Vega`. The dash suffix is tried first, then a trailing capitalized word.
pub fn extract_name(label: &str) -> Option<&str> {
    DASH_NAME
        .captures(label)
        .or_else(|| TRAILING_NAME.captures(label))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// At least three characters and no ASCII digits.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= 3 && !name.chars().any(|c| c.is_ascii_digit())
}

/// Name extraction plus validation and the chart's non-star label list
#[derive(Debug, Clone)]
pub struct NameRules {
    excluded: Vec<String>,
}

impl Default for NameRules {
    fn default() -> Self {
        Self::new(default_excluded_names())
    }
}

impl NameRules {
    pub fn new(excluded: Vec<String>) -> Self {
        Self { excluded }
    }

    /// Return the accepted name for `label`, or `None` if the element should be skipped.
    pub fn accept(&self, label: &str) -> Option<String> {
        let name = extract_name(label)?;
        if !is_valid_name(name) {
            return None;
        }
        if self.excluded.iter().any(|excluded| excluded == name) {
            return None;
        }
        Some(name.to_string())
    }
}
