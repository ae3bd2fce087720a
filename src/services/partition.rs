//! Per-system color storage
//!
//! A partition answers two questions for one color system: which name does
//! this exact hex code have, and which (Lab, name) pairs are candidates for a
//! nearest-color search. Both views read the same insertion-ordered map, so a
//! hex code is present in one exactly when it is present in the other.

use cie_lab::Lab;
use indexmap::IndexMap;

use crate::models::{ColorDefinition, HexCode};

#[derive(Debug, Clone)]
struct PartitionEntry {
    name: String,
    lab: Lab,
}

/// Colors of one system, keyed by hex code in registration order.
#[derive(Debug, Clone, Default)]
pub struct SystemPartition {
    entries: IndexMap<HexCode, PartitionEntry>,
}

impl SystemPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the name for a hex code.
    ///
    /// An overwritten hex code keeps its original scan position.
    pub fn insert(&mut self, definition: ColorDefinition, lab: Lab) {
        self.entries.insert(
            definition.hex_code,
            PartitionEntry {
                name: definition.name,
                lab,
            },
        );
    }

    /// Exact lookup: the name registered for this hex code
    pub fn name_for(&self, hex_code: &HexCode) -> Option<&str> {
        self.entries.get(hex_code).map(|entry| entry.name.as_str())
    }

    /// Nearest-neighbor candidates in registration order
    pub fn candidates(&self) -> impl Iterator<Item = (Lab, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.lab, entry.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
