//! Reader for color definition files
//!
//! One definition per line, a name followed by a `#`-prefixed hex code:
//!
//! ```text
//! # comment lines start with '#'
//! café au lait #a67b5b
//! dark green #013220
//! ```
//!
//! Only the text format is checked here; hex codes are validated when the
//! definitions are registered.

use std::io::BufRead;

use crate::error::TintError;

/// Parse one line into `(name, hex)`. `Ok(None)` for comments and blank lines.
pub fn parse_line(line: &str) -> Result<Option<(String, String)>, String> {
    if line.starts_with('#') || line.trim().is_empty() {
        return Ok(None);
    }

    match line.split_once('#') {
        Some((name, hex)) if !name.trim().is_empty() => {
            Ok(Some((name.to_string(), hex.to_string())))
        }
        Some(_) => Err("missing color name before '#'".to_string()),
        None => Err("missing '#' before hex code".to_string()),
    }
}

/// Read all `(name, hex)` pairs from a color definition stream.
pub fn read_colors<R: BufRead>(reader: R) -> Result<Vec<(String, String)>, TintError> {
    let mut colors = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // Tolerate a UTF-8 byte order mark on the first line
        let line = if index == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };

        match parse_line(line) {
            Ok(Some(pair)) => colors.push(pair),
            Ok(None) => {}
            Err(message) => {
                return Err(TintError::ColorFile {
                    line: index + 1,
                    message,
                })
            }
        }
    }

    Ok(colors)
}
