//! Validation service implementation.
//!
//! Provides the default implementation of the `TemplateValidator` port,
//! running every checker over a template and merging what they report.

use std::collections::HashSet;

use tracing::{debug, debug_span, trace, warn};

use super::{
    buttons, carousel, composition, fields,
    path::FieldPath,
    text::{self, TextKind},
    variables,
};
use crate::template::{
    domain::{
        BodyComponent, ButtonsComponent, CardComponent, CarouselComponent, Category, Component,
        FooterComponent, HeaderComponent, Rule, TemplateDefinition, ValidationResult, Violation,
    },
    error::TemplateParseError,
    ports::validator::{TemplateValidator, ValidationConfig},
};

/// Default implementation of the template validator.
///
/// Runs every rule regardless of earlier failures, so an author sees all
/// defects in one pass. Violations are ordered by component declaration,
/// then by check, and repeated `(rule, path)` pairs are dropped.
///
/// # Examples
///
/// ```
/// use template_lint::template::domain::{BodyComponent, Category, Component, Rule, TemplateDefinition};
/// use template_lint::template::ports::validator::TemplateValidator;
/// use template_lint::template::validation::service::DefaultTemplateValidator;
///
/// let template = TemplateDefinition::new("Welcome_Template", Category::Marketing, "en_US")
///     .with_component(Component::Body(BodyComponent::new("Welcome aboard!")));
///
/// let validator = DefaultTemplateValidator::new();
/// let result = validator.validate(&template);
/// assert!(!result.is_ok());
/// assert!(result.has_rule(Rule::InvalidTemplateName));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultTemplateValidator {
    config: ValidationConfig,
}

impl DefaultTemplateValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Parses raw JSON text and validates it.
    ///
    /// Text that is not a template yields a single `structural_error`.
    #[must_use]
    pub fn validate_str(&self, raw: &str) -> ValidationResult {
        match TemplateDefinition::from_json_str(raw) {
            Ok(template) => self.validate(&template),
            Err(err) => structural_failure(&err),
        }
    }

    fn check_header<'t>(
        &self,
        header: &'t HeaderComponent,
        path: &FieldPath,
        report: &mut Report<'t>,
    ) {
        if let Some(header_text) = header.text() {
            let text_path = path.field("text");
            report.extend(text::check_char_limit(
                TextKind::Header,
                header_text,
                &text_path,
                &self.config,
            ));
            report.extend(text::check_formatting(header_text, &text_path));
            report.extend(variables::check_variables(
                header_text,
                &header.variable_examples,
                &text_path,
                &path.field("variableExamples"),
            ));
            report.record_text(header_text);
        }
        report.extend(fields::check_media_header(header, path, &self.config));
    }

    fn check_body<'t>(
        &self,
        body: &'t BodyComponent,
        category: Option<Category>,
        path: &FieldPath,
        report: &mut Report<'t>,
    ) {
        let text_path = path.field("text");
        report.extend(text::check_char_limit(
            TextKind::Body,
            &body.text,
            &text_path,
            &self.config,
        ));
        report.extend(text::check_formatting(&body.text, &text_path));
        report.extend(variables::check_variables(
            &body.text,
            &body.variable_examples,
            &text_path,
            &path.field("variableExamples"),
        ));
        if category == Some(Category::Authentication) {
            report.extend(fields::check_authentication_body(&body.text, &text_path));
        }
        report.record_text(&body.text);
    }

    fn check_footer<'t>(
        &self,
        footer: &'t FooterComponent,
        path: &FieldPath,
        report: &mut Report<'t>,
    ) {
        let text_path = path.field("text");
        report.extend(text::check_char_limit(
            TextKind::Footer,
            &footer.text,
            &text_path,
            &self.config,
        ));
        report.extend(text::check_formatting(&footer.text, &text_path));
        report.record_text(&footer.text);
    }

    fn check_buttons<'t>(
        &self,
        component: &'t ButtonsComponent,
        path: &FieldPath,
        report: &mut Report<'t>,
    ) {
        report.extend(buttons::check_buttons(component, path, &self.config));
        for button in &component.buttons {
            report.record_text(button.text());
        }
    }

    fn check_carousel<'t>(
        &self,
        carousel: &'t CarouselComponent,
        path: &FieldPath,
        report: &mut Report<'t>,
    ) {
        report.extend(carousel::check_carousel(carousel, path, &self.config));

        for (card_index, card) in carousel.cards.iter().enumerate() {
            let card_path = path.item("cards", card_index);
            report.extend(composition::check_card_composition(card, &card_path));

            for (index, component) in card.components.iter().enumerate() {
                let component_path = card_path.item("components", index);
                match component {
                    CardComponent::Header(header) => {
                        self.check_header(header, &component_path, report);
                    }
                    CardComponent::Body(body) => {
                        self.check_body(body, None, &component_path, report);
                    }
                    CardComponent::Footer(footer) => {
                        self.check_footer(footer, &component_path, report);
                    }
                    CardComponent::Buttons(button_group) => {
                        self.check_buttons(button_group, &component_path, report);
                    }
                }
            }
        }
    }
}

impl Default for DefaultTemplateValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateValidator for DefaultTemplateValidator {
    fn validate(&self, template: &TemplateDefinition) -> ValidationResult {
        let span = debug_span!(
            "validate_template",
            name = %template.name,
            components = template.components.len()
        );
        let _entered = span.enter();

        let mut report = Report::default();
        let root = FieldPath::root();

        report.extend(fields::check_template_name(&template.name, &self.config));
        report.extend(fields::check_language_code(&template.language));
        report.extend(composition::check_template_composition(&template.components));

        for (index, component) in template.components.iter().enumerate() {
            let path = root.item("components", index);
            match component {
                Component::Header(header) => self.check_header(header, &path, &mut report),
                Component::Body(body) => {
                    self.check_body(body, Some(template.category), &path, &mut report);
                }
                Component::Footer(footer) => self.check_footer(footer, &path, &mut report),
                Component::Buttons(button_group) => {
                    self.check_buttons(button_group, &path, &mut report);
                }
                Component::Carousel(carousel) => {
                    self.check_carousel(carousel, &path, &mut report);
                }
            }
        }

        let emoji = text::check_emoji_limit(
            report.texts.iter().copied(),
            &root.field("components"),
            &self.config,
        );
        report.extend(emoji);

        let result = report.finish();
        debug!(
            ok = result.is_ok(),
            violations = result.violations().len(),
            "template validated"
        );
        result
    }

    fn validate_json(&self, value: &serde_json::Value) -> ValidationResult {
        match TemplateDefinition::from_json_value(value) {
            Ok(template) => self.validate(&template),
            Err(err) => structural_failure(&err),
        }
    }
}

/// Accumulates violations for one run, dropping repeated `(rule, path)`
/// pairs, and remembers every text for the template-wide emoji count.
#[derive(Default)]
struct Report<'t> {
    violations: Vec<Violation>,
    seen: HashSet<(Rule, String)>,
    texts: Vec<&'t str>,
}

impl<'t> Report<'t> {
    fn push(&mut self, violation: Violation) {
        if self.seen.insert((violation.rule, violation.path.clone())) {
            trace!(rule = %violation.rule, path = %violation.path, "violation recorded");
            self.violations.push(violation);
        }
    }

    fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        for violation in violations {
            self.push(violation);
        }
    }

    fn record_text(&mut self, text: &'t str) {
        self.texts.push(text);
    }

    fn finish(self) -> ValidationResult {
        ValidationResult::from_violations(self.violations)
    }
}

fn structural_failure(err: &TemplateParseError) -> ValidationResult {
    warn!(error = %err, "template could not be parsed");
    ValidationResult::from_violations(vec![Violation::new(
        Rule::StructuralError,
        "template",
        err.to_string(),
    )])
}
