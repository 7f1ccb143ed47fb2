//! Error types for template parsing and rejection.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. Rule breaches themselves are
//! [`Violation`] values; these errors only exist at the edges.

use super::domain::Violation;
use thiserror::Error;

/// Errors that can occur when reading a raw template request.
#[derive(Debug, Error)]
pub enum TemplateParseError {
    /// The input was not valid JSON.
    #[error("template is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON did not have the shape of a template definition.
    #[error("template has an invalid shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

impl TemplateParseError {
    /// Classifies a `serde_json` error by where it arose.
    #[must_use]
    pub fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                Self::InvalidJson(err)
            }
            serde_json::error::Category::Data | serde_json::error::Category::Io => {
                Self::InvalidShape(err)
            }
        }
    }
}

/// A template that failed validation, for callers that prefer `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template rejected: {}", format_violations(.violations))]
pub struct TemplateRejected {
    violations: Vec<Violation>,
}

impl TemplateRejected {
    /// Wraps the violations that caused the rejection.
    #[must_use]
    pub const fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the violations in report order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the error, returning the violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
