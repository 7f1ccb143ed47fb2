//! Button combination and label checks.

use std::collections::BTreeSet;

use super::{
    fields,
    path::FieldPath,
    text::{self, TextKind},
};
use crate::template::{
    domain::{Button, ButtonKind, ButtonsComponent, Rule, Violation},
    ports::validator::ValidationConfig,
};

/// Button type sets the platform accepts, compared as sets.
pub const VALID_COMBINATIONS: [&[ButtonKind]; 5] = [
    &[ButtonKind::QuickReply],
    &[ButtonKind::Url],
    &[ButtonKind::PhoneNumber],
    &[ButtonKind::QuickReply, ButtonKind::Url],
    &[ButtonKind::QuickReply, ButtonKind::PhoneNumber],
];

/// Characters that would be read as formatting in a button label.
const FORBIDDEN_LABEL_CHARACTERS: [char; 6] = ['*', '_', '~', '`', '{', '}'];

/// Runs every button check over one buttons component.
///
/// The combination check comes first, then each button in display order.
#[must_use]
pub fn check_buttons(
    component: &ButtonsComponent,
    path: &FieldPath,
    config: &ValidationConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    violations.extend(check_button_combination(component, path, config));

    for (index, button) in component.buttons.iter().enumerate() {
        let button_path = path.item("buttons", index);
        violations.extend(check_button(button, &button_path, config));
    }

    violations
}

/// Checks the set of button types and the per-type and total counts.
///
/// All problems with one component are folded into a single violation.
#[must_use]
pub fn check_button_combination(
    component: &ButtonsComponent,
    path: &FieldPath,
    config: &ValidationConfig,
) -> Option<Violation> {
    let kinds = component.kinds();
    let mut problems = Vec::new();

    if kinds.is_empty() {
        problems.push("at least one button is required".to_owned());
    } else if !is_valid_combination(&kinds) {
        problems.push(format!(
            "button combination [{}] is not allowed; valid: {}",
            join_kinds(&kinds),
            VALID_COMBINATIONS
                .iter()
                .map(|combination| format!("[{}]", join_kinds(combination)))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if kinds.len() > config.max_buttons {
        problems.push(format!(
            "{} buttons exceed the limit of {}",
            kinds.len(),
            config.max_buttons
        ));
    }

    let url_count = count_of(&kinds, ButtonKind::Url);
    if url_count > config.max_url_buttons {
        problems.push(format!(
            "{url_count} URL buttons exceed the limit of {}",
            config.max_url_buttons
        ));
    }

    let phone_count = count_of(&kinds, ButtonKind::PhoneNumber);
    if phone_count > config.max_phone_buttons {
        problems.push(format!(
            "{phone_count} phone buttons exceed the limit of {}",
            config.max_phone_buttons
        ));
    }

    (!problems.is_empty()).then(|| {
        Violation::new(
            Rule::InvalidButtonCombination,
            &path.field("buttons"),
            problems.join("; "),
        )
    })
}

/// Returns `true` if the set of `kinds` is one of [`VALID_COMBINATIONS`].
#[must_use]
pub fn is_valid_combination(kinds: &[ButtonKind]) -> bool {
    let present: BTreeSet<ButtonKind> = kinds.iter().copied().collect();
    VALID_COMBINATIONS
        .iter()
        .any(|combination| combination.iter().copied().collect::<BTreeSet<_>>() == present)
}

/// Checks one button's label and its type-specific field.
#[must_use]
pub fn check_button(button: &Button, path: &FieldPath, config: &ValidationConfig) -> Vec<Violation> {
    let text_path = path.field("text");
    let mut violations = Vec::new();

    violations.extend(text::check_char_limit(
        TextKind::Button,
        button.text(),
        &text_path,
        config,
    ));
    violations.extend(check_button_text(button.text(), &text_path));

    match button {
        Button::QuickReply(_) => {}
        Button::Url(url) => {
            violations.extend(fields::check_url(&url.url, &path.field("url"), config));
        }
        Button::PhoneNumber(phone) => {
            violations.extend(fields::check_phone_number(
                &phone.phone_number,
                &path.field("phoneNumber"),
                config,
            ));
        }
    }

    violations
}

/// Checks that a label is plain text: no emoji, formatting or line breaks.
#[must_use]
pub fn check_button_text(label: &str, path: &FieldPath) -> Option<Violation> {
    let mut reasons = Vec::new();

    if text::contains_emoji(label) {
        reasons.push("emoji");
    }
    if label.contains(FORBIDDEN_LABEL_CHARACTERS) {
        reasons.push("formatting characters");
    }
    if label.contains(['\n', '\r']) {
        reasons.push("line breaks");
    }

    (!reasons.is_empty()).then(|| {
        Violation::new(
            Rule::InvalidButtonText,
            path,
            format!(
                "button \"{label}\" contains {}; use plain text only",
                reasons.join(", ")
            ),
        )
    })
}

fn count_of(kinds: &[ButtonKind], kind: ButtonKind) -> usize {
    kinds.iter().filter(|candidate| **candidate == kind).count()
}

fn join_kinds(kinds: &[ButtonKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
