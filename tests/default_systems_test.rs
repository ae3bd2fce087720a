//! Tests against the bundled "de", "en" and "ral" color systems.

mod common;

use common::fixtures::{self, hex};
use pretty_assertions::assert_eq;
use tint::{Filter, MatchResult};

#[test]
fn test_bundled_systems_are_loaded() {
    let registry = fixtures::default_registry();
    assert_eq!(registry.systems(), vec!["de", "en", "ral"]);
    for system in ["de", "en", "ral"] {
        assert!(registry.system_len(system).unwrap_or(0) > 50, "{system} too small");
    }
}

#[test]
fn test_white() {
    let registry = fixtures::default_registry();
    let result = registry.match_name("white").unwrap();
    common::assert_exact_match(&result, hex::WHITE);
}

#[test]
fn test_weiss_resolves_to_german_name() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("weiss").unwrap();
    let found = registry
        .find_nearest(&matched.hex_code, Some("de"), None)
        .unwrap();
    common::assert_exact_find(&found, "weiß");
}

#[test]
fn test_pearl_with_german_filter() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("pearl").unwrap();
    let filter = Filter::names(["weiß", "schwarz"]);
    let found = registry
        .find_nearest(&matched.hex_code, Some("de"), Some(&filter))
        .unwrap();
    common::assert_near_find(&found, "weiß");
}

#[test]
fn test_pearl_in_german() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("pearl").unwrap();
    let found = registry
        .find_nearest(&matched.hex_code, Some("de"), None)
        .unwrap();
    common::assert_near_find(&found, "perlweiß");
}

#[test]
fn test_purple_with_mapping() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("purple").unwrap();
    let filter = Filter::mapping([(hex::RED, "red"), (hex::GREEN, "green")]).unwrap();
    let found = registry
        .find_nearest(&matched.hex_code, None, Some(&filter))
        .unwrap();
    assert_eq!(found.color_name, "red");
}

#[test]
fn test_perlweiss_in_english_with_filter() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("perlweiß").unwrap();
    let filter = Filter::names(["white", "black"]);
    let found = registry
        .find_nearest(&matched.hex_code, Some("en"), Some(&filter))
        .unwrap();
    assert_eq!(found.color_name, "white");
}

#[test]
fn test_ral_code_to_german_name() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("RAL 1000").unwrap();
    assert!(matched.is_exact());

    let nearest = registry
        .find_nearest(&matched.hex_code, Some("de"), None)
        .unwrap();
    let exact = registry.exact_name(&matched.hex_code, "de").unwrap();
    assert_eq!(nearest.color_name, "grünbeige");
    assert_eq!(exact, Some("grünbeige"));
}

#[test]
fn test_exact_nearest_in_same_system() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("pearl").unwrap();
    let found = registry
        .find_nearest(&matched.hex_code, Some("en"), None)
        .unwrap();
    common::assert_exact_find(&found, "pearl");
    assert_eq!(
        registry.exact_name(&matched.hex_code, "en").unwrap(),
        Some("pearl")
    );
}

#[test]
fn test_no_valid_color_name() {
    let registry = fixtures::default_registry();
    assert!(registry.match_name("not_a_valid_color").unwrap().score < 100);
}

#[test]
fn test_unlisted_hex_has_distance() {
    let registry = fixtures::default_registry();
    let found = registry.find_nearest(hex::UNLISTED, Some("en"), None).unwrap();
    assert!(found.distance > 0.0);
}

#[test]
fn test_listed_hex_has_no_distance() {
    let registry = fixtures::default_registry();
    let matched = registry.match_name("white").unwrap();
    let found = registry
        .find_nearest(&matched.hex_code, Some("en"), None)
        .unwrap();
    assert_eq!(found.distance, 0.0);
}

#[test]
fn test_descriptive_phrase_finds_compound_name() {
    let registry = fixtures::default_registry();
    let result = registry.match_name("a darker greenish color").unwrap();
    assert_eq!(
        result,
        MatchResult {
            hex_code: "013220".to_string(),
            score: 66,
        }
    );

    let result = registry.match_name("rather white").unwrap();
    common::assert_fuzzy_match(&result, hex::WHITE);
}

#[test]
fn test_typos_find_the_intended_name() {
    let registry = fixtures::default_registry();
    let cases = [
        ("light pearl", "eae0c8"),
        ("Dark Grene", "013220"),
        ("bright turquise", "08e8de"),
        ("cafe au lait", "a67b5b"),
    ];
    for (text, expected) in cases {
        let result = registry.match_name(text).unwrap();
        common::assert_fuzzy_match(&result, expected);
    }
}
