//! Coffee record
//!
//! One brewed coffee. Optional fields stay `None` until set; `None` and
//! `Some(0.0)` are different states everywhere in the crate.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RoastLevel;

/// A single entry in the coffee log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coffee {
    /// Identity key, assigned once at creation
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast_level: Option<RoastLevel>,

    #[serde(default)]
    pub notes: String,

    /// Opaque locator of a photo; never dereferenced by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grind_level: Option<f64>,

    /// Dose in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_in_grams: Option<f64>,

    /// Yield in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weigh_out: Option<f64>,
}

impl Coffee {
    /// Create a record with a fresh UUID v4 id and every optional unset
    pub fn new(name: impl Into<String>, notes: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, notes)
    }

    /// Create a record with a caller-supplied id
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roast_level: None,
            notes: notes.into(),
            image_path: None,
            grind_level: None,
            weight_in_grams: None,
            weigh_out: None,
        }
    }

    pub fn with_roast_level(mut self, level: RoastLevel) -> Self {
        self.roast_level = Some(level);
        self
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    pub fn with_grind_level(mut self, grind: f64) -> Self {
        self.grind_level = Some(grind);
        self
    }

    /// Set dose and yield together
    pub fn with_weights(mut self, weight_in_grams: f64, weigh_out: f64) -> Self {
        self.weight_in_grams = Some(weight_in_grams);
        self.weigh_out = Some(weigh_out);
        self
    }

    /// Yield divided by dose
    ///
    /// `None` unless both weights are present and strictly positive; no
    /// division happens otherwise.
    pub fn brew_ratio(&self) -> Option<BrewRatio> {
        match (self.weight_in_grams, self.weigh_out) {
            (Some(dose), Some(out)) if dose > 0.0 && out > 0.0 => Some(BrewRatio(out / dose)),
            _ => None,
        }
    }
}

/// Output-to-input weight ratio of a brew
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BrewRatio(f64);

impl BrewRatio {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Renders as `1:2.00`
impl fmt::Display for BrewRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{:.2}", self.0)
    }
}
