use cie_lab::ParseColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TintError {
    #[error("Unknown color system '{system}' (known systems: {})", .known.join(", "))]
    UnknownSystem { system: String, known: Vec<String> },

    #[error("No color names registered")]
    EmptyRegistry,

    #[error("Malformed hex code '{hex}': {source}")]
    MalformedHexCode {
        hex: String,
        #[source]
        source: ParseColorError,
    },

    #[error("No candidate colors left after filtering{}", in_system(.system))]
    NoCandidates { system: Option<String> },

    #[error("A color system is required unless the filter is a hex-to-name mapping")]
    MissingSystem,

    #[error("Color file error on line {line}: {message}")]
    ColorFile { line: usize, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn in_system(system: &Option<String>) -> String {
    match system {
        Some(system) => format!(" in system '{system}'"),
        None => String::new(),
    }
}

impl TintError {
    pub(crate) fn malformed_hex(hex: &str, source: ParseColorError) -> Self {
        TintError::MalformedHexCode {
            hex: hex.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_system_lists_known() {
        let error = TintError::UnknownSystem {
            system: "fr".to_string(),
            known: vec!["de".to_string(), "en".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Unknown color system 'fr' (known systems: de, en)"
        );
    }

    #[test]
    fn test_empty_registry() {
        let error = TintError::EmptyRegistry;
        assert_eq!(error.to_string(), "No color names registered");
    }

    #[test]
    fn test_malformed_hex_code_keeps_source() {
        use std::error::Error as _;

        let error = TintError::malformed_hex("fff", ParseColorError::InvalidLength(3));
        assert_eq!(
            error.to_string(),
            "Malformed hex code 'fff': invalid hex color length 3 (expected 6 digits)"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_no_candidates_with_and_without_system() {
        let error = TintError::NoCandidates {
            system: Some("de".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "No candidate colors left after filtering in system 'de'"
        );

        let error = TintError::NoCandidates { system: None };
        assert_eq!(error.to_string(), "No candidate colors left after filtering");
    }

    #[test]
    fn test_color_file_error() {
        let error = TintError::ColorFile {
            line: 7,
            message: "missing '#' before hex code".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Color file error on line 7: missing '#' before hex code"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: TintError = io_error.into();
        match error {
            TintError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
