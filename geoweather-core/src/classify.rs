//! Weather code classification
//!
//! Two pure, total functions over the integer weather code. Each is an ordered
//! rule table evaluated top to bottom; the first matching rule wins, so a rule
//! with an inclusive upper bound shadows every later rule below that bound.
//!
//! The icon and description tables do not share boundaries. Code 45, for
//! example, gets a rain icon and the "Foggy" description. That mismatch is
//! part of the observable behavior and is kept as-is.

use serde::{Deserialize, Serialize};

/// Icon shown next to the current conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Clear,
    Cloudy,
    Rain,
}

impl IconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Clear => "clear",
            IconCategory::Cloudy => "cloudy",
            IconCategory::Rain => "rain",
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate half of a classification rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeMatch {
    Exactly(i32),
    AtMost(i32),
    AtLeast(i32),
}

impl CodeMatch {
    pub const fn matches(self, code: i32) -> bool {
        match self {
            CodeMatch::Exactly(n) => code == n,
            CodeMatch::AtMost(n) => code <= n,
            CodeMatch::AtLeast(n) => code >= n,
        }
    }
}

pub const ICON_RULES: &[(CodeMatch, IconCategory)] = &[
    (CodeMatch::Exactly(0), IconCategory::Clear),
    (CodeMatch::AtMost(3), IconCategory::Cloudy),
    (CodeMatch::AtMost(67), IconCategory::Rain),
    (CodeMatch::AtLeast(80), IconCategory::Rain),
];

pub const ICON_FALLBACK: IconCategory = IconCategory::Cloudy;

pub const DESCRIPTION_RULES: &[(CodeMatch, &str)] = &[
    (CodeMatch::Exactly(0), "Clear sky"),
    (CodeMatch::AtMost(3), "Partly cloudy"),
    (CodeMatch::AtMost(48), "Foggy"),
    (CodeMatch::AtMost(67), "Rainy"),
    (CodeMatch::AtMost(77), "Snowy"),
    (CodeMatch::AtLeast(80), "Rain showers"),
];

pub const DESCRIPTION_FALLBACK: &str = "Unknown";

fn first_match<T: Copy>(rules: &[(CodeMatch, T)], code: i32, fallback: T) -> T {
    rules
        .iter()
        .find(|(rule, _)| rule.matches(code))
        .map(|(_, result)| *result)
        .unwrap_or(fallback)
}

/// Icon category for a weather code.
pub fn icon_category(code: i32) -> IconCategory {
    first_match(ICON_RULES, code, ICON_FALLBACK)
}

/// Human-readable description for a weather code.
pub fn description(code: i32) -> &'static str {
    first_match(DESCRIPTION_RULES, code, DESCRIPTION_FALLBACK)
}
