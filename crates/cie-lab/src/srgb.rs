//! sRGB color type
//!
//! sRGB is the encoding hex color codes are written in. Each channel is an
//! 8-bit gamma-encoded value.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color in sRGB color space with 8 bits per channel.
///
/// This is exactly the information a 6-digit hex code carries. Use
/// [`LinearRgb`](crate::LinearRgb) or [`Lab`](crate::Lab) for any math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0..=255)
    pub r: u8,
    /// Green channel (gamma-encoded, 0..=255)
    pub g: u8,
    /// Blue channel (gamma-encoded, 0..=255)
    pub b: u8,
}

impl Srgb {
    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use cie_lab::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical hex form: 6 lowercase digits, no `#`.
    ///
    /// # Example
    /// ```
    /// use cie_lab::Srgb;
    /// let color: Srgb = "#A67B5B".parse().unwrap();
    /// assert_eq!(color.to_hex(), "a67b5b");
    /// ```
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepts `RRGGBB` with an optional leading `#`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed. Shorthand
    /// 3-digit codes are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use cie_lab::Srgb;
    ///
    /// let white: Srgb = " #FFFFFF ".parse().unwrap();
    /// assert_eq!(white, Srgb::from_u8(255, 255, 255));
    ///
    /// assert!("#fff".parse::<Srgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let len = s.chars().count();
        if len != 6 {
            return Err(ParseColorError::InvalidLength(len));
        }

        let mut nibbles = [0u8; 6];
        for (position, found) in s.chars().enumerate() {
            let digit = found
                .to_digit(16)
                .ok_or(ParseColorError::InvalidDigit { position, found })?;
            nibbles[position] = digit as u8;
        }

        Ok(Self::from_u8(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        ))
    }
}
