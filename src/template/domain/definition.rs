//! The template definition aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::Component;
use crate::template::error::TemplateParseError;

/// A message template as submitted by its author.
///
/// Serialised with the platform's field names:
///
/// ```json
/// {
///   "name": "order_ready",
///   "category": "UTILITY",
///   "language": "en_US",
///   "components": [{ "type": "BODY", "text": "Your order is ready" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Template identifier, unique per business account.
    pub name: String,
    /// Template category.
    pub category: Category,
    /// Locale tag, such as `en_US`.
    pub language: String,
    /// Components in declaration order.
    #[serde(default)]
    pub components: Vec<Component>,
}

impl TemplateDefinition {
    /// Creates a template with no components.
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            language: language.into(),
            components: Vec::new(),
        }
    }

    /// Appends a component, preserving declaration order.
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Parses a template from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateParseError`] when the text is not JSON or does not
    /// have the shape of a template.
    pub fn from_json_str(raw: &str) -> Result<Self, TemplateParseError> {
        serde_json::from_str(raw).map_err(TemplateParseError::from_json)
    }

    /// Parses a template from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateParseError::InvalidShape`] when the value does not
    /// have the shape of a template.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, TemplateParseError> {
        Self::deserialize(value).map_err(TemplateParseError::from_json)
    }

    /// Returns the first body component, if any.
    #[must_use]
    pub fn body(&self) -> Option<&super::BodyComponent> {
        self.components.iter().find_map(|component| match component {
            Component::Body(body) => Some(body),
            _ => None,
        })
    }
}

/// Template category as understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Promotional content.
    Marketing,
    /// Transactional updates.
    Utility,
    /// One-time passcodes.
    Authentication,
}

impl Category {
    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "MARKETING",
            Self::Utility => "UTILITY",
            Self::Authentication => "AUTHENTICATION",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid category '{0}': expected MARKETING, UTILITY or AUTHENTICATION")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MARKETING" => Ok(Self::Marketing),
            "UTILITY" => Ok(Self::Utility),
            "AUTHENTICATION" => Ok(Self::Authentication),
            _ => Err(ParseCategoryError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
