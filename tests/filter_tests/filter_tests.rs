//! Tests for the filter engine
//!
//! These tests verify:
//! - Empty criteria pass the snapshot through untouched
//! - Case-insensitive substring matching on names
//! - Exact roast matching
//! - Stable order of kept records

use brewlog::filter::{filter, CoffeeFilter};
use brewlog::model::{Coffee, RoastLevel};

// =============================================================================
// Helper Functions
// =============================================================================

fn snapshot() -> Vec<Coffee> {
    vec![
        Coffee::with_id("1", "Ethiopia Yirgacheffe", "").with_roast_level(RoastLevel::Light),
        Coffee::with_id("2", "Kenya AA", "").with_roast_level(RoastLevel::Dark),
        Coffee::with_id("3", "Brazil Santos", "").with_roast_level(RoastLevel::Dark),
        Coffee::with_id("4", "Guatemala Antigua", ""),
        Coffee::with_id("5", "Sumatra Mandheling", "").with_roast_level(RoastLevel::MediumDark),
    ]
}

fn ids(records: &[Coffee]) -> Vec<&str> {
    records.iter().map(|c| c.id.as_str()).collect()
}

// =============================================================================
// Pass-through Tests
// =============================================================================

#[test]
fn test_empty_criteria_returns_input() {
    let records = snapshot();
    assert_eq!(filter(&records, "", None), records);
}

#[test]
fn test_blank_criteria_returns_input() {
    let records = snapshot();
    assert_eq!(filter(&records, "   ", None), records);
}

#[test]
fn test_empty_snapshot() {
    assert!(filter(&[], "kenya", Some(RoastLevel::Dark)).is_empty());
}

// =============================================================================
// Name Tests
// =============================================================================

#[test]
fn test_name_case_insensitive() {
    let records = snapshot();

    assert_eq!(ids(&filter(&records, "KENYA", None)), vec!["2"]);
    assert_eq!(ids(&filter(&records, "aa", None)), vec!["2"]);
}

#[test]
fn test_name_substring_keeps_order() {
    let records = snapshot();

    assert_eq!(ids(&filter(&records, "an", None)), vec!["3", "4", "5"]);
}

#[test]
fn test_name_no_match() {
    assert!(filter(&snapshot(), "panama", None).is_empty());
}

#[test]
fn test_name_non_ascii_case_folding() {
    let records = vec![Coffee::with_id("1", "Středně ŠPANĚLSKÁ", "")];
    assert_eq!(ids(&filter(&records, "španělská", None)), vec!["1"]);
}

// =============================================================================
// Roast Tests
// =============================================================================

#[test]
fn test_roast_only() {
    let records = snapshot();

    assert_eq!(ids(&filter(&records, "", Some(RoastLevel::Dark))), vec!["2", "3"]);
}

#[test]
fn test_roast_excludes_unset() {
    let records = snapshot();

    let result = filter(&records, "", Some(RoastLevel::Medium));

    assert!(result.is_empty());
}

#[test]
fn test_roast_is_exact_not_ordered() {
    let records = snapshot();

    assert_eq!(ids(&filter(&records, "", Some(RoastLevel::MediumDark))), vec!["5"]);
}

// =============================================================================
// Combined Tests
// =============================================================================

#[test]
fn test_name_and_roast() {
    let records = vec![
        Coffee::with_id("1", "Ethiopia Yirgacheffe", ""),
        Coffee::with_id("2", "Kenya AA", "").with_roast_level(RoastLevel::Dark),
        Coffee::with_id("3", "Brazil Santos", "").with_roast_level(RoastLevel::Medium),
    ];

    let result = filter(&records, "a", Some(RoastLevel::Dark));

    assert_eq!(ids(&result), vec!["2"]);
}

#[test]
fn test_blank_name_with_roast_ignores_name() {
    let records = snapshot();

    assert_eq!(ids(&filter(&records, "  ", Some(RoastLevel::Light))), vec!["1"]);
}

// =============================================================================
// CoffeeFilter Tests
// =============================================================================

#[test]
fn test_filter_value_is_empty() {
    assert!(CoffeeFilter::default().is_empty());
    assert!(!CoffeeFilter::new("x", None).is_empty());
    assert!(!CoffeeFilter::new("", Some(RoastLevel::Dark)).is_empty());
}

#[test]
fn test_filter_value_matches() {
    let f = CoffeeFilter::new("santos", Some(RoastLevel::Dark));
    let records = snapshot();

    assert!(f.matches(&records[2]));
    assert!(!f.matches(&records[1]));
    assert_eq!(ids(&f.apply(&records)), vec!["3"]);
}
