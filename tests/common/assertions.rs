//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use tint::{FindResult, MatchResult, TintError};

/// Assert an exact name match to `hex`
pub fn assert_exact_match(result: &MatchResult, hex: &str) {
    assert_eq!(
        result,
        &MatchResult {
            hex_code: hex.to_string(),
            score: 100,
        }
    );
}

/// Assert a fuzzy match to `hex`: right color, score below 100
pub fn assert_fuzzy_match(result: &MatchResult, hex: &str) {
    assert_eq!(result.hex_code, hex);
    assert!(
        result.score < 100,
        "Expected fuzzy score below 100, got {}",
        result.score
    );
}

/// Assert an exact hex hit on `name`
pub fn assert_exact_find(result: &FindResult, name: &str) {
    assert_eq!(result.color_name, name);
    assert_eq!(result.distance, 0.0, "Expected exact hit on {name}");
}

/// Assert a nearest hit on `name` with positive distance
pub fn assert_near_find(result: &FindResult, name: &str) {
    assert_eq!(result.color_name, name);
    assert!(
        result.distance > 0.0,
        "Expected positive distance to {name}, got {}",
        result.distance
    );
}

/// Assert the error is [`TintError::UnknownSystem`] for `system`
pub fn assert_unknown_system(error: &TintError, system: &str) {
    match error {
        TintError::UnknownSystem { system: got, .. } => assert_eq!(got, system),
        other => panic!("Expected UnknownSystem, got {other:?}"),
    }
    assert!(
        error.to_string().contains(system),
        "Message should echo the system: {error}"
    );
}
