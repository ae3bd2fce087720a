//! Nearest-color search
//!
//! Candidates are scanned linearly with the CIEDE2000 distance. The first
//! candidate at the minimum distance wins, so scan order (registration order)
//! decides exact ties.

use std::collections::HashSet;

use cie_lab::{ciede2000, Lab};
use indexmap::IndexMap;

use crate::error::TintError;
use crate::models::{clean_name, HexCode};

/// Restricts the candidates of a nearest-color search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Only these names of the searched system are candidates
    Names(HashSet<String>),
    /// Explicit hex code -> name candidates; no color system is consulted
    Mapping(IndexMap<HexCode, String>),
}

impl Filter {
    /// Name filter. Names are cleaned the way registered names are.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Filter::Names(
            names
                .into_iter()
                .map(|name| clean_name(name.as_ref()))
                .collect(),
        )
    }

    /// Explicit candidate mapping from `(hex, name)` pairs.
    ///
    /// Hex codes are canonicalized; names are returned exactly as given.
    ///
    /// # Errors
    ///
    /// [`TintError::MalformedHexCode`] for the first hex code that does not
    /// parse.
    pub fn mapping<I, H, N>(pairs: I) -> Result<Self, TintError>
    where
        I: IntoIterator<Item = (H, N)>,
        H: AsRef<str>,
        N: AsRef<str>,
    {
        let mapping = pairs
            .into_iter()
            .map(|(hex, name)| Ok((HexCode::parse(hex.as_ref())?, name.as_ref().to_string())))
            .collect::<Result<IndexMap<_, _>, TintError>>()?;
        Ok(Filter::Mapping(mapping))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Filter::Mapping(_))
    }

    /// Whether a system name passes a name filter. Mappings admit nothing
    /// from a system.
    pub fn admits(&self, name: &str) -> bool {
        match self {
            Filter::Names(names) => names.contains(name),
            Filter::Mapping(_) => false,
        }
    }
}

/// Linear scan for the candidate closest to `target`.
///
/// Returns `None` when there are no candidates.
pub fn nearest<'a, I>(target: Lab, candidates: I) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = (Lab, &'a str)>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for (lab, name) in candidates {
        let distance = ciede2000(target, lab);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((name, distance)),
        }
    }

    best
}
