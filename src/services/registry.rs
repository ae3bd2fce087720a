//! The color registry
//!
//! Owns the global name index and the per-system partitions, and exposes
//! registration, fuzzy name matching and nearest-color search over them.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;

use super::color_file::read_colors;
use super::finder::{nearest, Filter};
use super::matcher::FuzzyMatcher;
use super::normalize::normalize;
use super::partition::SystemPartition;
use crate::assets::AssetLoader;
use crate::error::TintError;
use crate::models::{AppConfig, ColorDefinition, FindResult, HexCode, MatchResult};

/// A registry for color names and systems.
///
/// Registration takes `&mut self` and queries take `&self`, so any number of
/// concurrent readers is fine once registration is done. Share it behind a
/// lock if registration must continue while others read.
///
/// # Example
///
/// ```
/// use tint::TintRegistry;
///
/// let mut registry = TintRegistry::new(false).unwrap();
/// registry
///     .add_colors("en", [("white", "ffffff"), ("black", "000000")])
///     .unwrap();
///
/// let matched = registry.match_name("White").unwrap();
/// assert_eq!((matched.hex_code.as_str(), matched.score), ("ffffff", 100));
///
/// let found = registry.find_nearest("fffffe", Some("en"), None).unwrap();
/// assert_eq!(found.color_name, "white");
/// assert!(found.distance > 0.0);
/// ```
#[derive(Debug, Default)]
pub struct TintRegistry {
    /// Normalized name -> hex code across all systems, in first-registration order
    hex_by_name: IndexMap<String, HexCode>,
    systems: BTreeMap<String, SystemPartition>,
    matcher: FuzzyMatcher,
}

impl TintRegistry {
    /// Create a registry, optionally loaded with the bundled color systems
    /// ("de", "en" and "ral").
    pub fn new(load_defaults: bool) -> Result<Self, TintError> {
        let mut registry = Self::default();
        if load_defaults {
            registry.load_datasets(&AssetLoader::embedded())?;
        }
        Ok(registry)
    }

    /// Build a registry as described by the application config.
    ///
    /// Relative paths of extra systems resolve against the config file's
    /// directory.
    pub fn from_config(config: &AppConfig, loader: &AssetLoader) -> Result<Self, TintError> {
        let mut registry =
            Self::default().with_matcher(FuzzyMatcher::new().with_limit(config.match_limit));

        if config.load_defaults {
            registry.load_datasets(loader)?;
        }
        for (system, path) in &config.systems {
            registry.add_colors_from_path(system, loader.resolve_config_path(path))?;
        }

        Ok(registry)
    }

    /// Replace the fuzzy matcher (scorers, candidate limit).
    pub fn with_matcher(mut self, matcher: FuzzyMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Register every dataset the loader knows about, in sorted system order.
    pub fn load_datasets(&mut self, loader: &AssetLoader) -> Result<(), TintError> {
        for system in loader.dataset_systems() {
            let data = loader.read_dataset(&system)?;
            let count = self.add_colors_from_reader(&system, &*data)?;
            tracing::info!(system = %system, count, "Loaded color system");
        }
        Ok(())
    }

    /// Add color definitions to a color system.
    ///
    /// Names are stored lower-cased and trimmed; hex codes may carry a `#`
    /// and any case. The system is created on first use; existing entries
    /// stay unless overwritten by the same hex code (per system) or the same
    /// normalized name (name index).
    ///
    /// The batch is all or nothing: if any hex code is malformed, nothing
    /// is registered and [`TintError::MalformedHexCode`] is returned.
    ///
    /// Returns the number of definitions processed.
    pub fn add_colors<I, N, H>(&mut self, system: &str, colors: I) -> Result<usize, TintError>
    where
        I: IntoIterator<Item = (N, H)>,
        N: AsRef<str>,
        H: AsRef<str>,
    {
        let definitions = colors
            .into_iter()
            .map(|(name, hex)| ColorDefinition::new(name.as_ref(), hex.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let count = definitions.len();

        let partition = self.systems.entry(system.to_string()).or_default();
        for definition in definitions {
            let lab = definition.hex_code.to_lab();
            self.hex_by_name
                .insert(normalize(&definition.name), definition.hex_code.clone());
            partition.insert(definition, lab);
        }

        tracing::debug!(system, count, "Registered colors");
        Ok(count)
    }

    /// Add color definitions from a stream in the color definition format
    /// (`name #hexcode` per line, `#` comment lines).
    pub fn add_colors_from_reader<R: BufRead>(
        &mut self,
        system: &str,
        reader: R,
    ) -> Result<usize, TintError> {
        let colors = read_colors(reader)?;
        self.add_colors(system, colors)
    }

    /// Add color definitions from a UTF-8 file in the color definition format.
    pub fn add_colors_from_path(
        &mut self,
        system: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, TintError> {
        let path = path.as_ref();
        tracing::debug!(system, path = %path.display(), "Reading color file");
        let file = File::open(path)?;
        self.add_colors_from_reader(system, BufReader::new(file))
    }

    /// Registered system ids, sorted
    pub fn systems(&self) -> Vec<&str> {
        self.systems.keys().map(String::as_str).collect()
    }

    /// Number of colors in a system, `None` if it is not registered
    pub fn system_len(&self, system: &str) -> Option<usize> {
        self.systems.get(system).map(SystemPartition::len)
    }

    /// Number of distinct normalized names across all systems
    pub fn len(&self) -> usize {
        self.hex_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hex_by_name.is_empty()
    }

    fn partition(&self, system: &str) -> Result<&SystemPartition, TintError> {
        self.systems
            .get(system)
            .ok_or_else(|| TintError::UnknownSystem {
                system: system.to_string(),
                known: self.systems.keys().cloned().collect(),
            })
    }

    /// Match free text to a hex code.
    ///
    /// An exact hit on a normalized name scores 100. Otherwise the fuzzy
    /// matcher picks the best candidate with a score below 100; this never
    /// fails for odd input, callers judge trust by the score.
    ///
    /// # Errors
    ///
    /// [`TintError::EmptyRegistry`] if no names are registered.
    pub fn match_name(&self, text: &str) -> Result<MatchResult, TintError> {
        if self.hex_by_name.is_empty() {
            return Err(TintError::EmptyRegistry);
        }

        let key = normalize(text.trim());
        if let Some(hex_code) = self.hex_by_name.get(&key) {
            tracing::debug!(name = %key, hex = %hex_code, "Exact name match");
            return Ok(MatchResult {
                hex_code: hex_code.to_string(),
                score: 100,
            });
        }

        let (index, score) = self
            .matcher
            .best_match(&key, self.hex_by_name.keys().map(String::as_str))
            .ok_or(TintError::EmptyRegistry)?;
        let (name, hex_code) = self
            .hex_by_name
            .get_index(index)
            .ok_or(TintError::EmptyRegistry)?;

        tracing::debug!(input = %key, name = %name, hex = %hex_code, score, "Fuzzy name match");
        Ok(MatchResult {
            hex_code: hex_code.to_string(),
            score,
        })
    }

    /// Exact lookup of the name a system gives to a hex code.
    pub fn exact_name(&self, hex_code: &str, system: &str) -> Result<Option<&str>, TintError> {
        let hex_code = HexCode::parse(hex_code)?;
        Ok(self.partition(system)?.name_for(&hex_code))
    }

    /// Find the color name perceptually closest to a hex code.
    ///
    /// With [`Filter::Mapping`] the mapping alone supplies the candidates
    /// and `system` is ignored. Otherwise `system` is required and
    /// [`Filter::Names`] restricts its candidates.
    ///
    /// An exact hex hit returns distance 0.0 without computing any
    /// distances.
    ///
    /// # Errors
    ///
    /// - [`TintError::MissingSystem`] if there is neither a system nor a mapping
    /// - [`TintError::UnknownSystem`] if the system is not registered
    /// - [`TintError::MalformedHexCode`] if `hex_code` does not parse
    /// - [`TintError::NoCandidates`] if the filter leaves nothing to compare
    pub fn find_nearest(
        &self,
        hex_code: &str,
        system: Option<&str>,
        filter: Option<&Filter>,
    ) -> Result<FindResult, TintError> {
        let hex_code = HexCode::parse(hex_code)?;

        if let Some(Filter::Mapping(mapping)) = filter {
            if let Some(name) = mapping.get(&hex_code) {
                return Ok(FindResult {
                    color_name: name.clone(),
                    distance: 0.0,
                });
            }

            let target = hex_code.to_lab();
            let candidates = mapping
                .iter()
                .map(|(candidate, name)| (candidate.to_lab(), name.as_str()));
            return nearest(target, candidates)
                .map(|(name, distance)| FindResult {
                    color_name: name.to_string(),
                    distance,
                })
                .ok_or(TintError::NoCandidates { system: None });
        }

        let system = system.ok_or(TintError::MissingSystem)?;
        let partition = self.partition(system)?;

        if let Some(name) = partition.name_for(&hex_code) {
            if filter.map_or(true, |f| f.admits(name)) {
                tracing::debug!(system, hex = %hex_code, name, "Exact hex match");
                return Ok(FindResult {
                    color_name: name.to_string(),
                    distance: 0.0,
                });
            }
        }

        let target = hex_code.to_lab();
        let candidates = partition
            .candidates()
            .filter(|(_, name)| filter.map_or(true, |f| f.admits(name)));

        let (name, distance) = nearest(target, candidates).ok_or_else(|| {
            TintError::NoCandidates {
                system: Some(system.to_string()),
            }
        })?;

        tracing::debug!(system, hex = %hex_code, name, distance, "Nearest color");
        Ok(FindResult {
            color_name: name.to_string(),
            distance,
        })
    }
}
