//! Tests for the record model
//!
//! These tests verify:
//! - Record construction and id assignment
//! - Brew ratio rules (defined only for positive dose and yield)
//! - Roast level tags, labels and ordering

use brewlog::model::{Coffee, ParseRoastLevelError, RoastLevel};

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_assigns_unique_ids() {
    let a = Coffee::new("Ethiopia Yirgacheffe", "");
    let b = Coffee::new("Ethiopia Yirgacheffe", "");

    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
}

#[test]
fn test_new_leaves_optionals_unset() {
    let coffee = Coffee::new("Kenya AA", "bright");

    assert_eq!(coffee.notes, "bright");
    assert_eq!(coffee.roast_level, None);
    assert_eq!(coffee.image_path, None);
    assert_eq!(coffee.grind_level, None);
    assert_eq!(coffee.weight_in_grams, None);
    assert_eq!(coffee.weigh_out, None);
}

#[test]
fn test_zero_is_distinct_from_unset() {
    let unset = Coffee::with_id("1", "x", "");
    let zero = Coffee::with_id("1", "x", "").with_grind_level(0.0);

    assert_ne!(unset, zero);
    assert_eq!(zero.grind_level, Some(0.0));
}

// =============================================================================
// Brew Ratio Tests
// =============================================================================

#[test]
fn test_brew_ratio_defined() {
    let coffee = Coffee::new("Brazil Santos", "").with_weights(18.0, 36.0);
    let ratio = coffee.brew_ratio().unwrap();

    assert_eq!(ratio.value(), 2.0);
    assert_eq!(ratio.to_string(), "1:2.00");
}

#[test]
fn test_brew_ratio_zero_dose_undefined() {
    let coffee = Coffee::new("Brazil Santos", "").with_weights(0.0, 36.0);
    assert!(coffee.brew_ratio().is_none());
}

#[test]
fn test_brew_ratio_zero_yield_undefined() {
    let coffee = Coffee::new("Brazil Santos", "").with_weights(18.0, 0.0);
    assert!(coffee.brew_ratio().is_none());
}

#[test]
fn test_brew_ratio_missing_weight_undefined() {
    let mut coffee = Coffee::new("Brazil Santos", "");
    coffee.weigh_out = Some(36.0);
    assert!(coffee.brew_ratio().is_none());

    coffee.weigh_out = None;
    coffee.weight_in_grams = Some(18.0);
    assert!(coffee.brew_ratio().is_none());
}

#[test]
fn test_brew_ratio_negative_undefined() {
    let coffee = Coffee::new("Brazil Santos", "").with_weights(-18.0, -36.0);
    assert!(coffee.brew_ratio().is_none());
}

#[test]
fn test_brew_ratio_rounds_to_two_places() {
    let coffee = Coffee::new("Colombia", "").with_weights(15.0, 38.0);
    assert_eq!(coffee.brew_ratio().unwrap().to_string(), "1:2.53");
}

// =============================================================================
// Roast Level Tests
// =============================================================================

#[test]
fn test_roast_levels_ordered_light_to_dark() {
    let all = RoastLevel::ALL;
    assert_eq!(all.len(), 5);
    assert_eq!(all[0], RoastLevel::Light);
    assert_eq!(all[4], RoastLevel::Dark);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_roast_labels() {
    assert_eq!(RoastLevel::Light.label(), "Světlé pražení");
    assert_eq!(RoastLevel::MediumLight.label(), "Středně světlé");
    assert_eq!(RoastLevel::Medium.label(), "Střední pražení");
    assert_eq!(RoastLevel::MediumDark.label(), "Středně tmavé");
    assert_eq!(RoastLevel::Dark.label(), "Tmavé pražení");
    assert_eq!(RoastLevel::Dark.to_string(), "Tmavé pražení");
}

#[test]
fn test_roast_tag_parse() {
    for level in RoastLevel::ALL {
        assert_eq!(level.tag().parse::<RoastLevel>().unwrap(), level);
    }
    assert_eq!("MEDIUM_DARK".parse::<RoastLevel>().unwrap(), RoastLevel::MediumDark);
}

#[test]
fn test_roast_parse_rejects_labels_and_case() {
    assert_eq!(
        "Tmavé pražení".parse::<RoastLevel>(),
        Err(ParseRoastLevelError("Tmavé pražení".to_string()))
    );
    assert!("dark".parse::<RoastLevel>().is_err());
}
