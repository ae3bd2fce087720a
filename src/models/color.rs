use cie_lab::{Lab, Srgb};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TintError;

/// Canonical hex code: 6 lowercase hex digits, no `#`.
///
/// Parsing trims whitespace, strips a leading `#` and lowercases, so
/// `" #A67B5B"` and `"a67b5b"` are the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexCode {
    text: String,
    srgb: Srgb,
}

impl HexCode {
    /// Parse and canonicalize, reporting failures as [`TintError::MalformedHexCode`].
    pub fn parse(hex: &str) -> Result<Self, TintError> {
        hex.parse::<Self>()
            .map_err(|source| TintError::malformed_hex(hex, source))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn srgb(&self) -> Srgb {
        self.srgb
    }

    /// Perceptual representation used by the nearest-color search
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.srgb)
    }
}

impl FromStr for HexCode {
    type Err = cie_lab::ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let srgb: Srgb = s.parse()?;
        Ok(Self {
            text: srgb.to_hex(),
            srgb,
        })
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for HexCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Display form of a color name: lower-cased and trimmed.
pub fn clean_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A color name and its hex code, as stored in one color system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorDefinition {
    pub name: String,
    pub hex_code: HexCode,
}

impl ColorDefinition {
    /// Build a definition from raw text, cleaning the name and
    /// canonicalizing the hex code.
    pub fn new(name: &str, hex_code: &str) -> Result<Self, TintError> {
        Ok(Self {
            name: clean_name(name),
            hex_code: HexCode::parse(hex_code)?,
        })
    }
}
