//! Validator port for template validation.
//!
//! Defines the abstract interface for validating templates and the limits
//! the checks enforce.

use serde::{Deserialize, Serialize};

use crate::template::domain::{TemplateDefinition, ValidationResult};

/// Port for template validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Run every check and collect all violations (not fail-fast)
/// - Report violations in component declaration order, then check order
/// - Be stateless and thread-safe
pub trait TemplateValidator: Send + Sync {
    /// Validates a template against all rules.
    ///
    /// Never fails: rule breaches are reported in the returned
    /// [`ValidationResult`].
    fn validate(&self, template: &TemplateDefinition) -> ValidationResult;

    /// Parses a raw JSON template and validates it.
    ///
    /// Input that cannot be read as a template yields a result with a single
    /// `structural_error` violation.
    fn validate_json(&self, value: &serde_json::Value) -> ValidationResult;
}

/// Limits enforced by the checkers.
///
/// Defaults match the platform's published limits. Missing fields fall back
/// to the defaults when deserialised, so callers may override a subset.
///
/// # Examples
///
/// ```
/// use template_lint::template::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_body_length, 550);
/// assert_eq!(config.max_buttons, 3);
///
/// let overrides: ValidationConfig =
///     serde_json::from_str(r#"{"max_buttons": 10}"#).expect("valid overrides");
/// assert_eq!(overrides.max_buttons, 10);
/// assert_eq!(overrides.max_emoji, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum body length in characters.
    pub max_body_length: usize,
    /// Maximum text header length in characters.
    pub max_header_length: usize,
    /// Maximum footer length in characters.
    pub max_footer_length: usize,
    /// Maximum button label length in characters.
    pub max_button_text_length: usize,
    /// Maximum number of emoji across all template text.
    pub max_emoji: usize,
    /// Maximum number of buttons in one buttons component.
    pub max_buttons: usize,
    /// Maximum number of URL buttons in one buttons component.
    pub max_url_buttons: usize,
    /// Maximum number of phone buttons in one buttons component.
    pub max_phone_buttons: usize,
    /// Minimum number of carousel cards.
    pub min_carousel_cards: usize,
    /// Maximum number of carousel cards.
    pub max_carousel_cards: usize,
    /// Maximum template name length.
    pub max_name_length: usize,
    /// Maximum URL length.
    pub max_url_length: usize,
    /// Minimum digits after the `+` of a phone number.
    pub min_phone_digits: usize,
    /// Maximum digits after the `+` of a phone number.
    pub max_phone_digits: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_body_length: 550,
            max_header_length: 60,
            max_footer_length: 60,
            max_button_text_length: 20,
            max_emoji: 10,
            max_buttons: 3,
            max_url_buttons: 2,
            max_phone_buttons: 1,
            min_carousel_cards: 2,
            max_carousel_cards: 10,
            max_name_length: 512,
            max_url_length: 2000,
            min_phone_digits: 10,
            max_phone_digits: 15,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration with relaxed counts.
    ///
    /// Useful while drafting, when the author wants formatting and
    /// structure feedback before trimming content.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_emoji: 50,
            max_buttons: 10,
            max_url_buttons: 2,
            max_phone_buttons: 1,
            min_phone_digits: 7,
            ..Default::default()
        }
    }

    /// Creates a strict configuration with reduced limits.
    ///
    /// Useful as a conservative pre-check for marketing sends.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_body_length: 400,
            max_header_length: 45,
            max_footer_length: 45,
            max_button_text_length: 20,
            max_emoji: 3,
            max_buttons: 2,
            max_url_buttons: 1,
            max_phone_buttons: 1,
            min_carousel_cards: 2,
            max_carousel_cards: 5,
            max_name_length: 128,
            max_url_length: 1000,
            min_phone_digits: 10,
            max_phone_digits: 15,
        }
    }
}
