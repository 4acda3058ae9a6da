//! Filter Engine
//!
//! Narrows an in-memory snapshot by name and roast. Pure: no I/O, no locks.
//!
//! ## Rules
//! - Blank pattern and no roast: the input comes back unchanged
//! - Otherwise a record is kept iff
//!   (pattern is blank OR name contains pattern, ignoring case)
//!   AND (roast is unset OR record roast equals it)
//! - Kept records stay in input order

use crate::model::{Coffee, RoastLevel};

/// Name/roast criterion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoffeeFilter {
    /// Substring to look for in names; blank means "any name"
    pub name_pattern: String,

    /// Exact roast to require; `None` means "any roast, including unset"
    pub roast: Option<RoastLevel>,
}

impl CoffeeFilter {
    pub fn new(name_pattern: impl Into<String>, roast: Option<RoastLevel>) -> Self {
        Self {
            name_pattern: name_pattern.into(),
            roast,
        }
    }

    /// True when the filter lets everything through
    pub fn is_empty(&self) -> bool {
        self.pattern_is_blank() && self.roast.is_none()
    }

    /// Check a single record
    pub fn matches(&self, coffee: &Coffee) -> bool {
        let name_ok = self.pattern_is_blank()
            || coffee
                .name
                .to_lowercase()
                .contains(&self.name_pattern.to_lowercase());
        let roast_ok = self.roast.is_none() || coffee.roast_level == self.roast;

        name_ok && roast_ok
    }

    /// Stable filter over a snapshot
    pub fn apply(&self, records: &[Coffee]) -> Vec<Coffee> {
        if self.is_empty() {
            return records.to_vec();
        }

        records.iter().filter(|c| self.matches(c)).cloned().collect()
    }

    fn pattern_is_blank(&self) -> bool {
        self.name_pattern.trim().is_empty()
    }
}

/// Filter `records` by name pattern and roast
pub fn filter(records: &[Coffee], name_pattern: &str, roast: Option<RoastLevel>) -> Vec<Coffee> {
    CoffeeFilter::new(name_pattern, roast).apply(records)
}
