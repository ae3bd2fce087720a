//! Matching keys for color names
//!
//! Names are compared on their NFKC case-folded form, so spellings that only
//! differ in case, compatibility characters or `ß`/`ss` share one key.

use caseless::Caseless;
use unicode_normalization::UnicodeNormalization;

/// Unicode compatibility composition with full case folding (NFKC_CF-like).
///
/// Composes, folds, then composes again so folded expansions end up in
/// canonical form.
pub fn normalize(text: &str) -> String {
    text.nfkc().default_case_fold().nfkc().collect()
}
