//! Tint - match human readable color names to sRGB values (and vice versa)
//!
//! A [`TintRegistry`] holds color names from several color systems (English
//! "en", German "de" and RAL "ral" ship with the crate). Query it with free
//! text to get a hex code and a confidence score, or with a hex code to get
//! the perceptually closest name of a system and its CIEDE2000 distance.
//!
//! ```
//! use tint::{Filter, TintRegistry};
//!
//! let registry = TintRegistry::new(true).unwrap();
//!
//! let matched = registry.match_name("weiss").unwrap();
//! assert_eq!(matched.score, 100);
//!
//! let found = registry.find_nearest(&matched.hex_code, Some("de"), None).unwrap();
//! assert_eq!(found.color_name, "weiß");
//!
//! let limited = Filter::mapping([("00ffff", "cyan"), ("ffff00", "yellow")]).unwrap();
//! let found = registry.find_nearest("013220", None, Some(&limited)).unwrap();
//! assert_eq!(found.color_name, "cyan");
//! ```

pub mod assets;
pub mod error;
pub mod models;
pub mod services;

pub use error::TintError;
pub use models::{AppConfig, FindResult, MatchResult};
pub use services::{normalize, Filter, FuzzyMatcher, TintRegistry};
