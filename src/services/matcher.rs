//! Fuzzy matching of free text against registered color names
//!
//! Two scorers rank the names independently: a set-based scorer that
//! tolerates extra words and a standard scorer that rewards exact phrasing.
//! Each keeps its top candidates; the merged score of a name is the sum of
//! its two scores (0 where a scorer did not keep it), halved back into the
//! 0..=100 range.

use std::collections::HashMap;

use super::scorer::{process, Scorer, TokenSetRatio, WeightedRatio};

/// Default number of candidates each scorer keeps
pub const DEFAULT_LIMIT: usize = 5;

/// Highest score the fuzzy path can report; 100 is reserved for exact hits
pub const MAX_FUZZY_SCORE: u8 = 99;

/// Merges two [`Scorer`]s into a single best guess.
pub struct FuzzyMatcher {
    set_scorer: Box<dyn Scorer>,
    standard_scorer: Box<dyn Scorer>,
    limit: Option<usize>,
}

impl std::fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyMatcher")
            .field("set_scorer", &self.set_scorer.name())
            .field("standard_scorer", &self.standard_scorer.name())
            .field("limit", &self.limit)
            .finish()
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            set_scorer: Box::new(TokenSetRatio),
            standard_scorer: Box::new(WeightedRatio),
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates kept per scorer before merging; `None` keeps all.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the scorer pair.
    pub fn with_scorers(
        mut self,
        set_scorer: impl Scorer + 'static,
        standard_scorer: impl Scorer + 'static,
    ) -> Self {
        self.set_scorer = Box::new(set_scorer);
        self.standard_scorer = Box::new(standard_scorer);
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Top candidates of one scorer as `(choice index, score)`, best first.
    /// Equal scores keep choice order.
    fn extract(&self, scorer: &dyn Scorer, query: &str, choices: &[String]) -> Vec<(usize, u8)> {
        let mut scored: Vec<(usize, u8)> = choices
            .iter()
            .enumerate()
            .map(|(index, choice)| (index, scorer.score(query, choice)))
            .collect();

        // Stable sort: ties stay in choice order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = self.limit {
            scored.truncate(limit.max(1));
        }

        tracing::trace!(scorer = scorer.name(), candidates = ?scored, "Scored candidates");
        scored
    }

    /// Pick the best choice for `query`.
    ///
    /// Returns the index of the winning choice and its merged score, or
    /// `None` if there are no choices. Ties on the merged score go to the
    /// earliest choice.
    pub fn best_match<'a, I>(&self, query: &str, choices: I) -> Option<(usize, u8)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let choices: Vec<String> = choices.into_iter().map(process).collect();
        if choices.is_empty() {
            return None;
        }
        let query = process(query);

        let mut totals: HashMap<usize, u32> = HashMap::new();
        let scorers = [self.set_scorer.as_ref(), self.standard_scorer.as_ref()];
        for scorer in scorers {
            for (index, score) in self.extract(scorer, &query, &choices) {
                *totals.entry(index).or_insert(0) += u32::from(score);
            }
        }

        let (index, total) = totals
            .into_iter()
            .max_by(|(index_a, total_a), (index_b, total_b)| {
                total_a.cmp(total_b).then_with(|| index_b.cmp(index_a))
            })?;

        let score = (total / 2).min(u32::from(MAX_FUZZY_SCORE)) as u8;
        Some((index, score))
    }
}
