//! Carousel card count and structural consistency.
//!
//! Every card of a carousel must share the first card's structural
//! signature: the same component kinds in the same order, the same header
//! format, the same button types and the same placeholder count per text.

use super::{path::FieldPath, variables::placeholder_indices};
use crate::template::{
    domain::{
        ButtonKind, Card, CardComponent, CarouselComponent, ComponentKind, HeaderKind, Rule,
        Violation,
    },
    ports::validator::ValidationConfig,
};

/// Shape of one card component, compared across cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSignature {
    /// Component kind.
    pub kind: ComponentKind,
    /// Header format, for headers.
    pub header: Option<HeaderKind>,
    /// Button kinds, sorted, for buttons components.
    pub buttons: Vec<ButtonKind>,
    /// Number of placeholders in the component's text.
    pub variables: usize,
}

impl PartSignature {
    fn of(component: &CardComponent) -> Self {
        match component {
            CardComponent::Header(header) => Self {
                kind: ComponentKind::Header,
                header: Some(header.kind),
                buttons: Vec::new(),
                variables: header.text().map_or(0, |text| placeholder_indices(text).len()),
            },
            CardComponent::Body(body) => Self {
                kind: ComponentKind::Body,
                header: None,
                buttons: Vec::new(),
                variables: placeholder_indices(&body.text).len(),
            },
            CardComponent::Footer(footer) => Self {
                kind: ComponentKind::Footer,
                header: None,
                buttons: Vec::new(),
                variables: placeholder_indices(&footer.text).len(),
            },
            CardComponent::Buttons(buttons) => {
                let mut kinds = buttons.kinds();
                kinds.sort_unstable();
                Self {
                    kind: ComponentKind::Buttons,
                    header: None,
                    buttons: kinds,
                    variables: 0,
                }
            }
        }
    }

    fn describe(&self) -> String {
        match self.header {
            Some(format) => format!("{} ({format})", self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// Computes the structural signature of a card.
#[must_use]
pub fn card_signature(card: &Card) -> Vec<PartSignature> {
    card.components.iter().map(PartSignature::of).collect()
}

/// Checks the card count and that every card mirrors the first.
///
/// Only the first divergent card is reported, at its first differing field.
#[must_use]
pub fn check_carousel(
    carousel: &CarouselComponent,
    path: &FieldPath,
    config: &ValidationConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let count = carousel.cards.len();

    if !(config.min_carousel_cards..=config.max_carousel_cards).contains(&count) {
        violations.push(Violation::new(
            Rule::InvalidCarouselCardCount,
            &path.field("cards"),
            format!(
                "carousel must have {}-{} cards, got {count}",
                config.min_carousel_cards, config.max_carousel_cards
            ),
        ));
    }

    let mut cards = carousel.cards.iter().enumerate();
    let Some((_, first)) = cards.next() else {
        return violations;
    };
    let reference = card_signature(first);

    let divergence = cards.find_map(|(index, card)| {
        let card_path = path.item("cards", index);
        first_difference(&reference, &card_signature(card), &card_path)
            .map(|(field_path, detail)| (index, field_path, detail))
    });

    if let Some((index, field_path, detail)) = divergence {
        violations.push(Violation::new(
            Rule::CarouselStructureMismatch,
            &field_path,
            format!(
                "card {} structure doesn't match card 1: {detail}; all carousel cards must have identical component structure",
                index + 1
            ),
        ));
    }

    violations
}

fn first_difference(
    reference: &[PartSignature],
    candidate: &[PartSignature],
    card_path: &FieldPath,
) -> Option<(FieldPath, String)> {
    let length = reference.len().max(candidate.len());

    (0..length).find_map(|index| {
        let part_path = card_path.item("components", index);
        match (reference.get(index), candidate.get(index)) {
            (Some(expected), Some(found)) if expected == found => None,
            (Some(expected), Some(found))
                if expected.kind != found.kind || expected.header != found.header =>
            {
                Some((
                    part_path,
                    format!("expected {}, found {}", expected.describe(), found.describe()),
                ))
            }
            (Some(expected), Some(found)) if expected.buttons != found.buttons => Some((
                part_path.field("buttons"),
                format!(
                    "expected buttons [{}], found [{}]",
                    join_kinds(&expected.buttons),
                    join_kinds(&found.buttons)
                ),
            )),
            (Some(expected), Some(found)) => Some((
                part_path.field("text"),
                format!(
                    "expected {} placeholder(s), found {}",
                    expected.variables, found.variables
                ),
            )),
            (Some(expected), None) => Some((part_path, format!("missing {}", expected.describe()))),
            (None, Some(found)) => Some((part_path, format!("unexpected {}", found.describe()))),
            (None, None) => None,
        }
    })
}

fn join_kinds(kinds: &[ButtonKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
