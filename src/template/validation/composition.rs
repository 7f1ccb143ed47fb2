//! Component composition rules.
//!
//! A template, and each carousel card, needs exactly one body and at most
//! one component of every other kind except buttons.

use std::collections::BTreeMap;

use super::path::FieldPath;
use crate::template::domain::{Card, CardComponent, Component, ComponentKind, Rule, Violation};

/// Checks the top-level components of a template.
///
/// Besides the shared composition rules, a template carrying a carousel may
/// not also carry a top-level header: cards bring their own.
#[must_use]
pub fn check_template_composition(components: &[Component]) -> Vec<Violation> {
    let root = FieldPath::root();
    let mut violations = check_composition(components.iter().map(Component::kind), &root);

    let has_carousel = components
        .iter()
        .any(|component| matches!(component, Component::Carousel(_)));
    if has_carousel {
        for (index, component) in components.iter().enumerate() {
            if matches!(component, Component::Header(_)) {
                violations.push(Violation::new(
                    Rule::InvalidComponentCombination,
                    &root.item("components", index),
                    "a carousel template cannot have a top-level HEADER; each card carries its own",
                ));
            }
        }
    }

    violations
}

/// Checks the components of one carousel card.
#[must_use]
pub fn check_card_composition(card: &Card, card_path: &FieldPath) -> Vec<Violation> {
    check_composition(card.components.iter().map(CardComponent::kind), card_path)
}

fn check_composition(
    kinds: impl Iterator<Item = ComponentKind>,
    base: &FieldPath,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: BTreeMap<ComponentKind, usize> = BTreeMap::new();

    for (index, kind) in kinds.enumerate() {
        // Several buttons components may coexist; each is checked on its own.
        if kind == ComponentKind::Buttons {
            continue;
        }
        if let Some(first) = seen.get(&kind) {
            violations.push(Violation::new(
                Rule::DuplicateComponent,
                &base.item("components", index),
                format!("duplicate {kind} component; the first is at components[{first}]"),
            ));
        } else {
            seen.insert(kind, index);
        }
    }

    if !seen.contains_key(&ComponentKind::Body) {
        violations.push(Violation::new(
            Rule::MissingRequiredComponent,
            &base.field("components"),
            "BODY component is required",
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::domain::{
        BodyComponent, Button, ButtonsComponent, CarouselComponent, FooterComponent,
        HeaderComponent, HeaderKind,
    };
    use rstest::rstest;

    fn body() -> Component {
        Component::Body(BodyComponent::new("Hello"))
    }

    fn footer() -> Component {
        Component::Footer(FooterComponent::new("Reply STOP to opt out"))
    }

    fn card() -> Card {
        Card::new([
            CardComponent::Header(HeaderComponent::new_media(HeaderKind::Image, "a.png")),
            CardComponent::Body(BodyComponent::new("Card")),
        ])
    }

    #[rstest]
    fn single_body_passes() {
        assert!(check_template_composition(&[body(), footer()]).is_empty());
    }

    #[rstest]
    fn missing_body_is_reported() {
        let violations = check_template_composition(&[footer()]);
        assert_eq!(violations.len(), 1);
        let violation = violations.first().expect("one violation");
        assert_eq!(violation.rule, Rule::MissingRequiredComponent);
        assert_eq!(violation.path, "components");
    }

    #[rstest]
    fn duplicates_are_reported_at_each_repeat() {
        let violations = check_template_composition(&[body(), footer(), footer(), body()]);
        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["components[2]", "components[3]"]);
        assert!(violations.iter().all(|v| v.rule == Rule::DuplicateComponent));
    }

    #[rstest]
    fn several_buttons_components_are_allowed() {
        let buttons = |label: &str| {
            Component::Buttons(ButtonsComponent::new([Button::quick_reply(label)]))
        };
        assert!(check_template_composition(&[body(), buttons("A"), buttons("B")]).is_empty());
    }

    #[rstest]
    fn carousel_excludes_top_level_header() {
        let components = [
            Component::Header(HeaderComponent::new_text("Deals")),
            body(),
            Component::Carousel(CarouselComponent::new([card(), card()])),
        ];
        let violations = check_template_composition(&components);
        assert_eq!(violations.len(), 1);
        let violation = violations.first().expect("one violation");
        assert_eq!(violation.rule, Rule::InvalidComponentCombination);
        assert_eq!(violation.path, "components[0]");
    }

    #[rstest]
    fn card_without_body_is_reported_under_the_card() {
        let card = Card::new([CardComponent::Header(HeaderComponent::new_media(
            HeaderKind::Image,
            "a.png",
        ))]);
        let path = FieldPath::root().item("components", 1).item("cards", 0);
        let violations = check_card_composition(&card, &path);
        let violation = violations.first().expect("missing body");
        assert_eq!(violation.rule, Rule::MissingRequiredComponent);
        assert_eq!(violation.path, "components[1].cards[0].components");
    }
}
