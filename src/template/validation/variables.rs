//! Placeholder numbering and example consistency.
//!
//! Placeholders have the shape `{{N}}` with `N` a positive integer. The
//! indices used in one text must be exactly `1..=K`, and the author must
//! supply one example per index.

use std::collections::BTreeSet;

use super::path::FieldPath;
use crate::template::domain::{Rule, Violation};

/// Returns the placeholder indices of `text` in order of appearance.
///
/// Indices too large for `usize` saturate, which still reads as a gap.
///
/// # Examples
///
/// ```
/// use template_lint::template::validation::variables::placeholder_indices;
///
/// assert_eq!(placeholder_indices("Hi {{1}}, order {{3}} {{name}}"), vec![1, 3]);
/// ```
#[must_use]
pub fn placeholder_indices(text: &str) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut rest = text;

    while let Some((_, after_open)) = rest.split_once("{{") {
        let Some((inner, after_close)) = after_open.split_once("}}") else {
            break;
        };
        if !inner.is_empty() && inner.bytes().all(|byte| byte.is_ascii_digit()) {
            indices.push(inner.parse().unwrap_or(usize::MAX));
            rest = after_close;
        } else {
            rest = after_open;
        }
    }

    indices
}

/// Checks placeholder numbering in `text` and the number of `examples`.
///
/// The expected example count is the highest index used, so a gap is
/// reported both as a bad sequence and, when the author supplied one example
/// per placeholder, as a count mismatch.
#[must_use]
pub fn check_variables(
    text: &str,
    examples: &[String],
    text_path: &FieldPath,
    examples_path: &FieldPath,
) -> Vec<Violation> {
    let indices = placeholder_indices(text);
    let mut violations = Vec::new();

    if let Some(problem) = sequence_problem(&indices) {
        violations.push(Violation::new(
            Rule::InvalidVariableSequence,
            text_path,
            format!("placeholders must be numbered {{{{1}}}} upwards without gaps: {problem}"),
        ));
    }

    let highest = indices.iter().copied().max().unwrap_or(0);
    if examples.len() != highest {
        violations.push(Violation::new(
            Rule::VariableExampleCountMismatch,
            examples_path,
            format!(
                "{} example(s) supplied but placeholders require {highest}",
                examples.len()
            ),
        ));
    }

    violations
}

fn sequence_problem(indices: &[usize]) -> Option<String> {
    if indices.is_empty() {
        return None;
    }

    if indices.contains(&0) {
        return Some("found {{0}}".to_owned());
    }

    let mut seen = BTreeSet::new();
    for &index in indices {
        if !seen.insert(index) {
            return Some(format!("{{{{{index}}}}} is used more than once"));
        }
    }

    let highest = seen.last().copied().unwrap_or(0);
    let missing: Vec<String> = (1..=highest)
        .filter(|index| !seen.contains(index))
        .take(5)
        .map(|index| format!("{{{{{index}}}}}"))
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("missing {}", missing.join(", ")))
    }
}
