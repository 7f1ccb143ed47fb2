//! Behavioural integration tests for template validation.
//!
//! These tests exercise end-to-end scenarios through the public API,
//! from building or parsing a template to reading the violation report.

use rstest::{fixture, rstest};
use serde_json::json;
use template_lint::template::{
    domain::{
        BodyComponent, Button, ButtonsComponent, Card, CardComponent, CarouselComponent,
        Category, Component, HeaderComponent, HeaderKind, Rule, TemplateDefinition,
        ValidationResult,
    },
    ports::validator::TemplateValidator,
    validation::service::DefaultTemplateValidator,
};

#[fixture]
fn validator() -> DefaultTemplateValidator {
    DefaultTemplateValidator::new()
}

fn template_with_body(category: Category, body: BodyComponent) -> TemplateDefinition {
    TemplateDefinition::new("integration_case", category, "en_US")
        .with_component(Component::Body(body))
}

fn card(with_buttons: bool) -> Card {
    let mut components = vec![
        CardComponent::Header(HeaderComponent::new_media(HeaderKind::Image, "item.jpg")),
        CardComponent::Body(BodyComponent::new("Fresh stock")),
    ];
    if with_buttons {
        components.push(CardComponent::Buttons(ButtonsComponent::new([
            Button::quick_reply("Buy"),
        ])));
    }
    Card::new(components)
}

fn carousel_template(cards: Vec<Card>) -> TemplateDefinition {
    template_with_body(Category::Marketing, BodyComponent::new("This week's picks"))
        .with_component(Component::Carousel(CarouselComponent::new(cards)))
}

fn rules_of(result: &ValidationResult) -> Vec<Rule> {
    result.violations().iter().map(|v| v.rule).collect()
}

// ============================================================================
// Scenario: Over-long body
// ============================================================================

/// A body one character over the limit yields exactly one violation.
#[rstest]
fn overlong_body_yields_one_violation(validator: DefaultTemplateValidator) {
    let template = template_with_body(Category::Marketing, BodyComponent::new("a".repeat(551)));

    let result = validator.validate(&template);

    assert!(!result.is_ok());
    assert_eq!(rules_of(&result), vec![Rule::CharLimitExceeded]);
    let violation = result.violations().first().expect("one violation");
    assert_eq!(violation.path, "components[0].text");
}

// ============================================================================
// Scenario: Placeholder gap
// ============================================================================

/// A skipped placeholder is reported as a sequence error and a count mismatch.
#[rstest]
fn placeholder_gap_reports_sequence_and_count(validator: DefaultTemplateValidator) {
    let template = template_with_body(
        Category::Utility,
        BodyComponent::new("Hi {{1}}, your order {{3}} is ready").with_examples(["Ada", "A-1"]),
    );

    let result = validator.validate(&template);

    assert_eq!(
        rules_of(&result),
        vec![
            Rule::InvalidVariableSequence,
            Rule::VariableExampleCountMismatch
        ]
    );
    let sequence = result
        .with_rule(Rule::InvalidVariableSequence)
        .next()
        .expect("sequence violation");
    assert!(sequence.message.contains("missing {{2}}"));
    let count = result
        .with_rule(Rule::VariableExampleCountMismatch)
        .next()
        .expect("count violation");
    assert!(count.message.contains("2 example(s) supplied but placeholders require 3"));
}

// ============================================================================
// Scenario: Authentication body
// ============================================================================

/// Authentication templates must open with the fixed verification phrase.
#[rstest]
fn authentication_body_must_use_fixed_phrase(validator: DefaultTemplateValidator) {
    let template = template_with_body(
        Category::Authentication,
        BodyComponent::new("Welcome! Use {{1}} to verify").with_examples(["123456"]),
    );

    let result = validator.validate(&template);

    assert_eq!(rules_of(&result), vec![Rule::InvalidAuthenticationFormat]);
}

// ============================================================================
// Scenario: Carousel structure
// ============================================================================

/// A single-card carousel is below the minimum.
#[rstest]
fn single_card_carousel_is_rejected(validator: DefaultTemplateValidator) {
    let result = validator.validate(&carousel_template(vec![card(true)]));

    assert_eq!(rules_of(&result), vec![Rule::InvalidCarouselCardCount]);
    let violation = result.violations().first().expect("one violation");
    assert_eq!(violation.path, "components[1].cards");
}

/// A card missing the buttons its siblings carry is pointed at directly.
#[rstest]
fn divergent_card_is_pointed_at(validator: DefaultTemplateValidator) {
    let result = validator.validate(&carousel_template(vec![card(true), card(false), card(true)]));

    assert_eq!(rules_of(&result), vec![Rule::CarouselStructureMismatch]);
    let violation = result.violations().first().expect("one violation");
    assert!(violation.path.starts_with("components[1].cards[1]"));
    assert!(violation.message.starts_with("card 2 structure doesn't match card 1"));
}

// ============================================================================
// Scenario: Button combination
// ============================================================================

/// URL and phone buttons without a quick reply are not an allowed set.
#[rstest]
fn url_and_phone_without_quick_reply_is_rejected(validator: DefaultTemplateValidator) {
    let template = template_with_body(Category::Utility, BodyComponent::new("Need help?"))
        .with_component(Component::Buttons(ButtonsComponent::new([
            Button::url("Visit", "https://example.com"),
            Button::phone("Call", "+15551234567"),
        ])));

    let result = validator.validate(&template);

    assert_eq!(rules_of(&result), vec![Rule::InvalidButtonCombination]);
    let violation = result.violations().first().expect("one violation");
    assert_eq!(violation.path, "components[1].buttons");
}

// ============================================================================
// Scenario: Template name
// ============================================================================

#[rstest]
#[case("Welcome_Template", false)]
#[case("welcome_template", true)]
#[case("welcome-template", false)]
#[case("", false)]
fn template_names_follow_the_naming_rule(
    validator: DefaultTemplateValidator,
    #[case] name: &str,
    #[case] accepted: bool,
) {
    let template = TemplateDefinition::new(name, Category::Marketing, "en_US")
        .with_component(Component::Body(BodyComponent::new("Welcome aboard")));

    let result = validator.validate(&template);

    assert_eq!(!result.has_rule(Rule::InvalidTemplateName), accepted);
}

// ============================================================================
// Properties
// ============================================================================

/// Validating the same template twice gives the same report.
#[rstest]
fn repeated_validation_is_identical(validator: DefaultTemplateValidator) {
    let template = carousel_template(vec![card(true), card(false)])
        .with_component(Component::Header(HeaderComponent::new_text("*Deals")));

    assert_eq!(validator.validate(&template), validator.validate(&template));
}

/// Growing a body past its limit never removes the limit violation.
#[rstest]
#[case(550)]
#[case(551)]
#[case(600)]
fn limit_violation_is_monotonic(validator: DefaultTemplateValidator, #[case] length: usize) {
    let before = validator.validate(&template_with_body(
        Category::Marketing,
        BodyComponent::new("a".repeat(length)),
    ));
    let after = validator.validate(&template_with_body(
        Category::Marketing,
        BodyComponent::new("a".repeat(length + 1)),
    ));

    assert!(after.has_rule(Rule::CharLimitExceeded));
    if before.has_rule(Rule::CharLimitExceeded) {
        assert!(after.has_rule(Rule::CharLimitExceeded));
    }
}

/// Independent defects are each reported; nothing stops at the first.
#[rstest]
fn independent_defects_are_each_reported(validator: DefaultTemplateValidator) {
    let template = TemplateDefinition::new("Promo", Category::Authentication, "EN")
        .with_component(Component::Header(HeaderComponent::new_media(
            HeaderKind::Video,
            "promo.mov",
        )))
        .with_component(Component::Body(BodyComponent::new("Code {{1}}\n\nthanks")))
        .with_component(Component::Buttons(ButtonsComponent::new([Button::quick_reply(
            "Tap *here*",
        )])));

    let result = validator.validate(&template);

    let expected = [
        Rule::InvalidTemplateName,
        Rule::InvalidLanguageCode,
        Rule::InvalidMediaFormat,
        Rule::ConsecutiveLinebreaks,
        Rule::VariableExampleCountMismatch,
        Rule::InvalidAuthenticationFormat,
        Rule::InvalidButtonText,
    ];
    assert!(result.violations().len() >= expected.len());
    assert_eq!(rules_of(&result), expected);
}

// ============================================================================
// Raw JSON input
// ============================================================================

/// A report renders verbatim as `{ok, violations: [{rule, message, path}]}`.
#[rstest]
fn json_request_produces_json_report(validator: DefaultTemplateValidator) {
    let request = json!({
        "name": "cart_reminder",
        "category": "MARKETING",
        "language": "en_US",
        "components": [
            { "type": "BODY", "text": "You left {{1}} in your cart", "variableExamples": [] },
            { "type": "BUTTONS", "buttons": [
                { "type": "URL", "text": "Checkout", "url": "http://shop.example.com" }
            ] }
        ]
    });

    let result = validator.validate_json(&request);

    let report = serde_json::to_value(&result).expect("serialise report");
    assert_eq!(
        report,
        json!({
            "ok": false,
            "violations": [
                {
                    "rule": "variable_example_count_mismatch",
                    "message": "0 example(s) supplied but placeholders require 1",
                    "path": "components[0].variableExamples"
                },
                {
                    "rule": "invalid_url",
                    "message": "URL must use HTTPS: http://shop.example.com",
                    "path": "components[1].buttons[0].url"
                }
            ]
        })
    );
}

/// A component without its discriminator is a single structural error.
#[rstest]
fn untagged_component_is_a_structural_error(validator: DefaultTemplateValidator) {
    let request = json!({
        "name": "broken",
        "category": "UTILITY",
        "language": "en",
        "components": [{ "text": "no type here" }]
    });

    let result = validator.validate_json(&request);

    assert_eq!(rules_of(&result), vec![Rule::StructuralError]);
    let violation = result.violations().first().expect("one violation");
    assert_eq!(violation.path, "template");
}
