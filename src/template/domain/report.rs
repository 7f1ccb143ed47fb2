//! Validation report types.
//!
//! Rule breaches are data, not failures. A validation run always yields a
//! [`ValidationResult`] listing every [`Violation`] found.

use serde::Serialize;
use std::fmt;

/// Machine-readable code of a template rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Text longer than the limit for its component kind.
    CharLimitExceeded,
    /// Too many emoji across all template text.
    EmojiLimitExceeded,
    /// Two line breaks in a row.
    ConsecutiveLinebreaks,
    /// Bold, italic or strikethrough marker without a partner.
    UnbalancedFormatting,
    /// Button types or counts the platform does not accept.
    InvalidButtonCombination,
    /// Button label with emoji, formatting or line breaks.
    InvalidButtonText,
    /// Placeholders not numbered `{{1}}..{{K}}`.
    InvalidVariableSequence,
    /// Example count differs from the highest placeholder index.
    VariableExampleCountMismatch,
    /// Carousel with too few or too many cards.
    InvalidCarouselCardCount,
    /// Carousel card shaped differently from the first card.
    CarouselStructureMismatch,
    /// Template name outside `[a-z0-9_]` or too long.
    InvalidTemplateName,
    /// URL that is not HTTPS or is too long.
    InvalidUrl,
    /// Phone number not in international format.
    InvalidPhoneNumber,
    /// Media file extension not matching the header format.
    InvalidMediaFormat,
    /// Authentication body not starting with the fixed phrase.
    InvalidAuthenticationFormat,
    /// No body component.
    MissingRequiredComponent,
    /// A component kind present more than once.
    DuplicateComponent,
    /// Components that cannot appear together.
    InvalidComponentCombination,
    /// Locale tag not shaped like `en` or `en_US`.
    InvalidLanguageCode,
    /// Input that could not be read as a template at all.
    StructuralError,
}

impl Rule {
    /// Returns the snake-case rule code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CharLimitExceeded => "char_limit_exceeded",
            Self::EmojiLimitExceeded => "emoji_limit_exceeded",
            Self::ConsecutiveLinebreaks => "consecutive_linebreaks",
            Self::UnbalancedFormatting => "unbalanced_formatting",
            Self::InvalidButtonCombination => "invalid_button_combination",
            Self::InvalidButtonText => "invalid_button_text",
            Self::InvalidVariableSequence => "invalid_variable_sequence",
            Self::VariableExampleCountMismatch => "variable_example_count_mismatch",
            Self::InvalidCarouselCardCount => "invalid_carousel_card_count",
            Self::CarouselStructureMismatch => "carousel_structure_mismatch",
            Self::InvalidTemplateName => "invalid_template_name",
            Self::InvalidUrl => "invalid_url",
            Self::InvalidPhoneNumber => "invalid_phone_number",
            Self::InvalidMediaFormat => "invalid_media_format",
            Self::InvalidAuthenticationFormat => "invalid_authentication_format",
            Self::MissingRequiredComponent => "missing_required_component",
            Self::DuplicateComponent => "duplicate_component",
            Self::InvalidComponentCombination => "invalid_component_combination",
            Self::InvalidLanguageCode => "invalid_language_code",
            Self::StructuralError => "structural_error",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a violation.
///
/// Every rule currently blocks submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Blocks submission.
    #[default]
    Error,
}

/// One reported rule breach.
///
/// Serialises as `{"rule": ..., "message": ..., "path": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The breached rule.
    pub rule: Rule,
    /// Severity, always [`Severity::Error`].
    #[serde(skip_serializing)]
    pub severity: Severity,
    /// Human-readable description of the breach.
    pub message: String,
    /// Location of the offending field, e.g. `components[2].buttons[0].text`.
    pub path: String,
}

impl Violation {
    /// Creates an error-severity violation.
    #[must_use]
    pub fn new(rule: Rule, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            message: message.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.rule, self.path, self.message)
    }
}

/// Outcome of validating one template.
///
/// # Examples
///
/// ```
/// use template_lint::template::domain::{Rule, ValidationResult, Violation};
///
/// let clean = ValidationResult::from_violations(Vec::new());
/// assert!(clean.is_ok());
///
/// let dirty = ValidationResult::from_violations(vec![Violation::new(
///     Rule::InvalidTemplateName,
///     "name",
///     "template name must use lowercase letters, digits and underscores only",
/// )]);
/// assert!(!dirty.is_ok());
/// assert!(dirty.has_rule(Rule::InvalidTemplateName));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    ok: bool,
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Builds a result; `ok` is true exactly when `violations` is empty.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            ok: violations.is_empty(),
            violations,
        }
    }

    /// Returns `true` when no rule was breached.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns the violations in report order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns `true` if any violation carries `rule`.
    #[must_use]
    pub fn has_rule(&self, rule: Rule) -> bool {
        self.violations.iter().any(|violation| violation.rule == rule)
    }

    /// Returns the violations carrying `rule`.
    pub fn with_rule(&self, rule: Rule) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.rule == rule)
    }

    /// Converts the report into a `Result` for `?`-style callers.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRejected`](crate::template::error::TemplateRejected)
    /// carrying every violation when the template is not valid.
    pub fn into_result(self) -> Result<(), crate::template::error::TemplateRejected> {
        if self.ok {
            Ok(())
        } else {
            Err(crate::template::error::TemplateRejected::new(self.violations))
        }
    }
}
