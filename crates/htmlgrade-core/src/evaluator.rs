//! Selector presence evaluation against a parsed HTML document.
//!
//! The evaluator is a pure, single-pass function from (HTML, checks path)
//! to a selector-to-presence mapping. The document handle is returned
//! explicitly from [`Document::parse`] and threaded by reference, so
//! repeated evaluations can never observe a stale document.

use std::collections::BTreeMap;
use std::path::Path;

use scraper::{Html, Selector};
use serde::Serialize;
use thiserror::Error;

use crate::checks::{self, ChecksError};

/// Errors that can occur during check evaluation.
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Checks error: {0}")]
    Checks(#[from] ChecksError),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// A parsed HTML document ready for selector queries.
///
/// Owned by one evaluation call and never mutated.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw HTML into a queryable document.
    ///
    /// The underlying parser is error-tolerant: malformed markup yields a
    /// best-effort tree rather than a failure.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Whether at least one element matches the compiled selector.
    pub fn has_match(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }
}

/// Result of one evaluation: each selector mapped to its presence.
///
/// Keys iterate and serialize in lexicographic order, which coincides with
/// the sorted selector list. Duplicate selectors in the source list
/// collapse to a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    results: BTreeMap<String, bool>,
}

impl CheckReport {
    /// Presence of a single selector, if it was part of the evaluation.
    pub fn is_present(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    /// Number of distinct selectors evaluated.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if no selectors were evaluated.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate selector/presence pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(selector, present)| (selector.as_str(), *present))
    }

    /// Render the report as a 4-space-indented JSON object.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(out).expect("serde_json output is valid UTF-8"))
    }
}

/// Evaluate each selector against the document, recording presence.
///
/// A selector the query library cannot compile is an error naming the
/// offending selector; silently recording `false` would make a typo
/// indistinguishable from a missing element.
pub fn evaluate(document: &Document, selectors: &[String]) -> Result<CheckReport, EvaluationError> {
    let mut results = BTreeMap::new();

    for selector in selectors {
        let compiled =
            Selector::parse(selector).map_err(|err| EvaluationError::InvalidSelector {
                selector: selector.clone(),
                message: err.to_string(),
            })?;
        results.insert(selector.clone(), document.has_match(&compiled));
    }

    Ok(CheckReport { results })
}

/// Check raw HTML against the selectors in a checks file.
///
/// This is the main entry point: loads and sorts the checks, parses the
/// document, and evaluates every selector in a single pass. The only side
/// effect is the file read performed by the loader; any loader failure
/// propagates unchanged.
pub fn check_html(html: &str, checks_path: impl AsRef<Path>) -> Result<CheckReport, EvaluationError> {
    let selectors = checks::load_checks(checks_path)?;
    let document = Document::parse(html);
    evaluate(&document, &selectors)
}
