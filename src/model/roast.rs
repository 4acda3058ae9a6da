//! Roast levels
//!
//! Closed, ordered set of five levels. The durable format stores the tag
//! (`MEDIUM_DARK`), never the label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How dark the beans were roasted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoastLevel {
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

/// Tag → label lookup, in enumeration order
const LABELS: [(RoastLevel, &str, &str); 5] = [
    (RoastLevel::Light, "LIGHT", "Světlé pražení"),
    (RoastLevel::MediumLight, "MEDIUM_LIGHT", "Středně světlé"),
    (RoastLevel::Medium, "MEDIUM", "Střední pražení"),
    (RoastLevel::MediumDark, "MEDIUM_DARK", "Středně tmavé"),
    (RoastLevel::Dark, "DARK", "Tmavé pražení"),
];

impl RoastLevel {
    /// All levels, lightest first
    pub const ALL: [RoastLevel; 5] = [
        RoastLevel::Light,
        RoastLevel::MediumLight,
        RoastLevel::Medium,
        RoastLevel::MediumDark,
        RoastLevel::Dark,
    ];

    /// Tag used in the durable format
    pub fn tag(self) -> &'static str {
        LABELS[self as usize].1
    }

    /// Fixed display label
    pub fn label(self) -> &'static str {
        LABELS[self as usize].2
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the five tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown roast level tag: {0:?}")]
pub struct ParseRoastLevelError(pub String);

impl FromStr for RoastLevel {
    type Err = ParseRoastLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LABELS
            .iter()
            .find(|(_, tag, _)| *tag == s)
            .map(|(level, _, _)| *level)
            .ok_or_else(|| ParseRoastLevelError(s.to_string()))
    }
}
