use serde::Serialize;

/// Outcome of matching free text against the registered color names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Hex code of the best matching name
    pub hex_code: String,
    /// Confidence 0..=100; only an exact (normalized) name match scores 100
    pub score: u8,
}

impl MatchResult {
    pub fn is_exact(&self) -> bool {
        self.score == 100
    }
}

/// Outcome of searching for the perceptually closest color name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindResult {
    pub color_name: String,
    /// CIEDE2000 distance; 0.0 for an exact hex hit
    pub distance: f64,
}

impl FindResult {
    pub fn is_exact(&self) -> bool {
        self.distance == 0.0
    }
}
