//! String similarity scorers for fuzzy name matching
//!
//! Every scorer maps a pair of strings to 0..=100, where 100 means the
//! strings are interchangeable for that scorer. Inputs are expected to be
//! run through [`process`] first.
//!
//! The edit distance underneath is the insert/delete (Indel) distance on
//! characters, expressed as `200 * LCS / (len_a + len_b)`: two strings that
//! share a long common subsequence score high even when one of them carries
//! extra words.

use std::collections::BTreeSet;

/// A pluggable string similarity strategy.
pub trait Scorer: Send + Sync {
    /// Short identifier for logging
    fn name(&self) -> &'static str;

    /// Similarity of two processed strings, 0..=100
    fn score(&self, query: &str, choice: &str) -> u8;
}

/// Lowercase, turn everything that is not alphanumeric into a space, and
/// collapse runs of whitespace.
pub fn process(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Length of the longest common subsequence of two character slices.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Indel similarity of two character slices, 0.0..=100.0
fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    200.0 * lcs_len(a, b) as f64 / (a.len() + b.len()) as f64
}

/// Normalized edit-distance similarity, 0.0..=100.0
fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel_ratio(&a, &b)
}

/// Best [`ratio`] of the shorter string against every equally long window
/// of the longer one.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if shorter.is_empty() {
        return 0.0;
    }
    if shorter.len() == longer.len() {
        return indel_ratio(shorter, longer);
    }

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        best = best.max(indel_ratio(shorter, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort(a: &str, b: &str, partial: bool) -> f64 {
    let (a, b) = (sorted_tokens(a), sorted_tokens(b));
    if partial {
        partial_ratio(&a, &b)
    } else {
        ratio(&a, &b)
    }
}

/// Compare the shared tokens against each side's shared-plus-remaining
/// tokens. A string whose tokens are a subset of the other's scores 100.
fn token_set(a: &str, b: &str, partial: bool) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let join = |tokens: Vec<&str>| tokens.join(" ");
    let intersection = join(tokens_a.intersection(&tokens_b).copied().collect());
    let only_a = join(tokens_a.difference(&tokens_b).copied().collect());
    let only_b = join(tokens_b.difference(&tokens_a).copied().collect());

    let combine = |rest: &str| {
        if intersection.is_empty() {
            rest.to_string()
        } else if rest.is_empty() {
            intersection.clone()
        } else {
            format!("{intersection} {rest}")
        }
    };
    let combined_a = combine(&only_a);
    let combined_b = combine(&only_b);

    let compare: fn(&str, &str) -> f64 = if partial { partial_ratio } else { ratio };
    compare(&intersection, &combined_a)
        .max(compare(&intersection, &combined_b))
        .max(compare(&combined_a, &combined_b))
}

/// Plain normalized edit-distance ratio. Sensitive to word order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ratio;

impl Scorer for Ratio {
    fn name(&self) -> &'static str {
        "ratio"
    }

    fn score(&self, query: &str, choice: &str) -> u8 {
        to_score(ratio(query, choice))
    }
}

/// Token-set comparison: ignores word order and tolerates extra words on
/// either side ("light pearl white" vs "pearl" scores 100).
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetRatio;

impl Scorer for TokenSetRatio {
    fn name(&self) -> &'static str {
        "token_set_ratio"
    }

    fn score(&self, query: &str, choice: &str) -> u8 {
        to_score(token_set(query, choice, false))
    }
}

/// Weighted ratio: the plain ratio, upgraded by scaled-down partial and
/// token based ratios when those fit the pair better.
///
/// Strings of similar length are compared whole (ratio, token sort, token
/// set). When one string is at least 1.5 times longer, substring alignment
/// is tried instead and discounted, more heavily beyond a length ratio of 8.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

impl WeightedRatio {
    const UNBASE_SCALE: f64 = 0.95;
    const PARTIAL_SCALE: f64 = 0.90;
    const FAR_PARTIAL_SCALE: f64 = 0.60;
}

impl Scorer for WeightedRatio {
    fn name(&self) -> &'static str {
        "weighted_ratio"
    }

    fn score(&self, query: &str, choice: &str) -> u8 {
        let query_len = query.chars().count();
        let choice_len = choice.chars().count();
        if query_len == 0 || choice_len == 0 {
            return 0;
        }

        let base = ratio(query, choice);
        let len_ratio = query_len.max(choice_len) as f64 / query_len.min(choice_len) as f64;

        let best = if len_ratio < 1.5 {
            let token_sort_score = token_sort(query, choice, false) * Self::UNBASE_SCALE;
            let token_set_score = token_set(query, choice, false) * Self::UNBASE_SCALE;
            base.max(token_sort_score).max(token_set_score)
        } else {
            let partial_scale = if len_ratio > 8.0 {
                Self::FAR_PARTIAL_SCALE
            } else {
                Self::PARTIAL_SCALE
            };
            let partial = partial_ratio(query, choice) * partial_scale;
            let token_scale = Self::UNBASE_SCALE * partial_scale;
            let partial_sort = token_sort(query, choice, true) * token_scale;
            let partial_set = token_set(query, choice, true) * token_scale;
            base.max(partial).max(partial_sort).max(partial_set)
        };

        to_score(best)
    }
}
