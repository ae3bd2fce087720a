//! Error type for hex color parsing

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a hex code cannot be decoded into three 8-bit channels,
/// either because it has the wrong length or contains a non-hex character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits (must be 6 after stripping '#')
    InvalidLength(usize),
    /// Character that is not a hexadecimal digit
    InvalidDigit {
        /// Zero-based position among the digits
        position: usize,
        /// The offending character
        found: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "invalid hex color length {} (expected 6 digits)", len)
            }
            ParseColorError::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {:?} at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_length() {
        let error = ParseColorError::InvalidLength(5);
        assert_eq!(
            error.to_string(),
            "invalid hex color length 5 (expected 6 digits)"
        );
    }

    #[test]
    fn test_display_invalid_digit() {
        let error = ParseColorError::InvalidDigit {
            position: 2,
            found: 'g',
        };
        assert_eq!(error.to_string(), "invalid hex digit 'g' at position 2");
    }
}
