//! Pure matching helpers over the rule catalog.
//!
//! All four helpers are total for well-formed string/number input and keep no
//! state; malformed input is a caller contract violation, not a handled error.

use super::domain::{CombinationRule, Formality, Season};

pub(crate) const PATTERN_TOKENS: [&str; 5] = ["check", "striped", "printed", "pattern", "checked"];

const FORMAL_TOKENS: [&str; 5] = ["shirt", "dress", "suit", "blazer", "chelsea-boots"];

const CASUAL_TOKENS: [&str; 6] = [
    "t-shirt",
    "hoodie",
    "sweatshirt",
    "trackpant",
    "sandal",
    "canvas",
];

/// Case-insensitive substring test of a candidate against a combination rule.
///
/// Each present rule field must appear somewhere inside the corresponding
/// candidate descriptor; absent fields are wildcards. Tokens are deliberately
/// coarse so that e.g. `light-blue` matches inside a longer free-form label.
pub fn matches_combination(top: &str, bottom: &str, footwear: &str, rule: &CombinationRule) -> bool {
    field_matches(top, rule.top)
        && field_matches(bottom, rule.bottom)
        && field_matches(footwear, rule.footwear)
}

// An empty token is treated exactly like an absent one (wildcard).
fn field_matches(candidate: &str, token: Option<&str>) -> bool {
    match token {
        None => true,
        Some(token) if token.is_empty() => true,
        Some(token) => candidate.to_lowercase().contains(&token.to_lowercase()),
    }
}

/// Classify a temperature (degrees Celsius) into a season bucket.
///
/// The boundaries 15 and 25 belong to the all-season band, not to either extreme.
pub fn season_for_temperature(temperature: f32) -> Season {
    if temperature > 25.0 {
        Season::Summer
    } else if temperature < 15.0 {
        Season::Winter
    } else {
        Season::AllSeason
    }
}

/// True when the lowercased item label names any known pattern token.
pub fn has_pattern(item_name: &str) -> bool {
    let name = item_name.to_lowercase();
    PATTERN_TOKENS.iter().any(|token| name.contains(token))
}

/// Classify an item label into a formality tier.
///
/// The formal check runs strictly before the casual check, so a label hitting
/// both token sets is classified formal. Anything else is smart-casual.
pub fn formality_of(item_name: &str) -> Formality {
    let name = item_name.to_lowercase();
    if FORMAL_TOKENS.iter().any(|token| name.contains(token)) {
        Formality::Formal
    } else if CASUAL_TOKENS.iter().any(|token| name.contains(token)) {
        Formality::Casual
    } else {
        Formality::SmartCasual
    }
}
