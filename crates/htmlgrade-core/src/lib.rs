//! # htmlgrade-core
//!
//! Selector presence checks over parsed HTML documents.
//!
//! Given an HTML document and a checks file (a JSON array of CSS
//! selectors), this crate answers one question per selector: does at least
//! one matching element exist?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same HTML and checks always produce the same report
//! 2. **Ordered**: report keys follow the lexicographically sorted checks
//! 3. **Single-pass**: one file read, one parse, one query per selector
//!
//! ## Example
//!
//! ```rust,ignore
//! use htmlgrade_core::check_html;
//!
//! let html = "<html><body><h1>Hi</h1></body></html>";
//! let report = check_html(html, "checks.json")?;
//! println!("{}", report.to_json_pretty()?);
//! ```

pub mod checks;
pub mod evaluator;

// Re-export main types at crate root
pub use checks::{load_checks, parse_checks, ChecksError};
pub use evaluator::{check_html, evaluate, CheckReport, Document, EvaluationError};
