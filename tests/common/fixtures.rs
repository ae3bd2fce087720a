//! Test fixtures and constants.

use tint::TintRegistry;

/// Small English system used by most scenarios
pub const EN_BASIC: [(&str, &str); 2] = [("white", "ffffff"), ("black", "000000")];

/// German counterpart sharing no names with [`EN_BASIC`]
pub const DE_BASIC: [(&str, &str); 2] = [("weiß", "ffffff"), ("schwarz", "000000")];

/// Hex codes for the scenarios
pub mod hex {
    pub const WHITE: &str = "ffffff";
    pub const NEAR_WHITE: &str = "fffffe";
    pub const BLACK: &str = "000000";
    pub const RED: &str = "ff0000";
    pub const GREEN: &str = "00ff00";
    /// Not part of any bundled system
    pub const UNLISTED: &str = "842456";
}

/// Color definition file with comments, blank lines and odd spacing
pub const COLOR_FILE: &str = "\
# brand colors
Brand Blue #0033AA

  brand   orange   #ff6600
# accent
accent #1a2b3c
";

/// Empty registry without the bundled systems
pub fn empty_registry() -> TintRegistry {
    TintRegistry::new(false).expect("empty registry")
}

/// Registry with only "en" = [`EN_BASIC`]
pub fn basic_registry() -> TintRegistry {
    let mut registry = empty_registry();
    registry.add_colors("en", EN_BASIC).expect("register en");
    registry
}

/// Registry with "en" = [`EN_BASIC`] and "de" = [`DE_BASIC`]
pub fn bilingual_registry() -> TintRegistry {
    let mut registry = basic_registry();
    registry.add_colors("de", DE_BASIC).expect("register de");
    registry
}

/// Registry loaded with the bundled systems
pub fn default_registry() -> TintRegistry {
    TintRegistry::new(true).expect("default registry")
}
