//! Checks file loading.
//!
//! A checks file is a UTF-8 JSON array of CSS selector strings, e.g.
//! `["h1", "a", "#submit", "[data-role='alert']"]`. The loader validates
//! the shape (array of strings) and returns the selectors sorted
//! lexicographically.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when loading a checks file.
#[derive(Error, Debug)]
pub enum ChecksError {
    #[error("Failed to read checks file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse checks JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid checks configuration: {0}")]
    InvalidConfig(String),
}

/// Load a checks file and return its selectors, sorted lexicographically.
///
/// The file is read in a single call; if it disappears after the caller's
/// existence assertion, the read itself fails with [`ChecksError::Io`].
pub fn load_checks(path: impl AsRef<Path>) -> Result<Vec<String>, ChecksError> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_checks(&contents)
}

/// Parse checks content as a JSON array of selector strings.
///
/// Well-formed JSON of the wrong shape (not an array, or an array with a
/// non-string element) is reported as [`ChecksError::InvalidConfig`] rather
/// than a generic parse failure.
pub fn parse_checks(json: &str) -> Result<Vec<String>, ChecksError> {
    let value: Value = serde_json::from_str(json)?;

    let entries = value.as_array().ok_or_else(|| {
        ChecksError::InvalidConfig("expected a JSON array of selector strings".to_string())
    })?;

    let mut selectors = entries
        .iter()
        .map(|entry| {
            entry.as_str().map(str::to_owned).ok_or_else(|| {
                ChecksError::InvalidConfig(format!("expected a selector string, got: {}", entry))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    selectors.sort();

    tracing::debug!(count = selectors.len(), "loaded checks");

    Ok(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_sorts_selectors() {
        let selectors = parse_checks(r#"["p", "a", "h1"]"#).unwrap();
        assert_eq!(selectors, vec!["a", "h1", "p"]);
    }

    #[test]
    fn test_parse_empty_array() {
        let selectors = parse_checks("[]").unwrap();
        assert!(selectors.is_empty());
    }

    #[test]
    fn test_parse_preserves_duplicates() {
        // Collapsing duplicates is the evaluator's concern, not the loader's.
        let selectors = parse_checks(r#"["a", "a"]"#).unwrap();
        assert_eq!(selectors, vec!["a", "a"]);
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_checks(r#"["a","#);
        assert!(matches!(result, Err(ChecksError::Json(_))));
    }

    #[test]
    fn test_non_array_is_invalid_config() {
        let result = parse_checks(r#"{"a": true}"#);
        assert!(matches!(result, Err(ChecksError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_string_element_is_invalid_config() {
        let result = parse_checks(r#"["a", 7]"#);
        assert!(matches!(result, Err(ChecksError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["h2", "h1"]"#).unwrap();

        let selectors = load_checks(file.path()).unwrap();
        assert_eq!(selectors, vec!["h1", "h2"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_checks("no/such/checks.json");
        assert!(matches!(result, Err(ChecksError::Io(_))));
    }
}
