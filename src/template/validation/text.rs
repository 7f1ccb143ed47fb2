//! Primitive checks over a single piece of template text.
//!
//! Lengths are counted in Unicode scalar values, emoji in extended grapheme
//! clusters, so a family or flag sequence counts once.

use std::cmp::Ordering;

use unicode_segmentation::UnicodeSegmentation;

use super::path::FieldPath;
use crate::template::{
    domain::{Rule, Violation},
    ports::validator::ValidationConfig,
};

/// Kind of text, each with its own length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Body text.
    Body,
    /// Text header.
    Header,
    /// Footer text.
    Footer,
    /// Button label.
    Button,
}

impl TextKind {
    /// Returns the lower-case label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Button => "button",
        }
    }

    /// Returns the configured limit for this kind.
    #[must_use]
    pub const fn limit(self, config: &ValidationConfig) -> usize {
        match self {
            Self::Body => config.max_body_length,
            Self::Header => config.max_header_length,
            Self::Footer => config.max_footer_length,
            Self::Button => config.max_button_text_length,
        }
    }
}

/// Checks `text` against the character limit for `kind`.
#[must_use]
pub fn check_char_limit(
    kind: TextKind,
    text: &str,
    path: &FieldPath,
    config: &ValidationConfig,
) -> Option<Violation> {
    let limit = kind.limit(config);
    let length = text.chars().count();
    (length > limit).then(|| {
        Violation::new(
            Rule::CharLimitExceeded,
            path,
            format!(
                "{} text exceeds {limit} character limit ({length} characters)",
                kind.label()
            ),
        )
    })
}

/// Counts emoji in `text`, one per grapheme cluster.
///
/// # Examples
///
/// ```
/// use template_lint::template::validation::text::count_emoji;
///
/// assert_eq!(count_emoji("Hello 👋🏽"), 1);
/// assert_eq!(count_emoji("👨\u{200d}👩\u{200d}👧 🇩🇪"), 2);
/// assert_eq!(count_emoji("plain"), 0);
/// ```
#[must_use]
pub fn count_emoji(text: &str) -> usize {
    text.graphemes(true)
        .filter(|grapheme| is_emoji_grapheme(grapheme))
        .count()
}

/// Returns `true` if `text` contains at least one emoji.
#[must_use]
pub fn contains_emoji(text: &str) -> bool {
    text.graphemes(true).any(is_emoji_grapheme)
}

/// Checks the combined emoji count of every text in the template.
#[must_use]
pub fn check_emoji_limit<'a>(
    texts: impl IntoIterator<Item = &'a str>,
    path: &FieldPath,
    config: &ValidationConfig,
) -> Option<Violation> {
    let total: usize = texts.into_iter().map(count_emoji).sum();
    (total > config.max_emoji).then(|| {
        Violation::new(
            Rule::EmojiLimitExceeded,
            path,
            format!(
                "template has {total} emoji, maximum {} allowed",
                config.max_emoji
            ),
        )
    })
}

fn is_emoji_grapheme(grapheme: &str) -> bool {
    grapheme.chars().any(|character| {
        has_emoji_presentation(character) || matches!(character, '\u{FE0F}' | '\u{20E3}')
    })
}

fn has_emoji_presentation(character: char) -> bool {
    let code = u32::from(character);
    EMOJI_PRESENTATION
        .binary_search_by(|&(start, end)| {
            if end < code {
                Ordering::Less
            } else if start > code {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

// Code points with Emoji_Presentation=Yes, sorted. Symbols that default to
// text presentation (such as U+2600 or U+2713) only count with U+FE0F.
const EMOJI_PRESENTATION: &[(u32, u32)] = &[
    (0x231A, 0x231B),
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x1F004, 0x1F004),
    (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1E6, 0x1F1FF),
    (0x1F201, 0x1F201),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F236),
    (0x1F238, 0x1F23A),
    (0x1F250, 0x1F251),
    (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335),
    (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA),
    (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC),
    (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567),
    (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4),
    (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC),
    (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7),
    (0x1F6DC, 0x1F6DF),
    (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB),
    (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1F9FF),
    (0x1FA70, 0x1FA7C),
    (0x1FA80, 0x1FA89),
    (0x1FA8F, 0x1FAC6),
    (0x1FACE, 0x1FADC),
    (0x1FADF, 0x1FAE9),
    (0x1FAF0, 0x1FAF8),
];

/// Formatting marker characters and the style each one toggles.
const MARKERS: [(char, &str); 3] = [('*', "bold"), ('_', "italic"), ('~', "strikethrough")];

fn marker_style(character: char) -> Option<&'static str> {
    MARKERS
        .iter()
        .find(|(marker, _)| *marker == character)
        .map(|(_, style)| *style)
}

/// Checks line breaks and formatting markers in `text`.
///
/// Markers must pair up without nesting: while one span is open, a
/// different marker reports the open span as unbalanced and starts its own.
/// Positions in messages are 1-based character offsets.
#[must_use]
pub fn check_formatting(text: &str, path: &FieldPath) -> Vec<Violation> {
    let mut violations = Vec::new();

    if text.replace("\r\n", "\n").contains("\n\n") {
        violations.push(Violation::new(
            Rule::ConsecutiveLinebreaks,
            path,
            "consecutive line breaks are not allowed",
        ));
    }

    let mut open: Option<(char, usize)> = None;
    for (offset, character) in text.chars().enumerate() {
        if marker_style(character).is_none() {
            continue;
        }
        let position = offset + 1;
        match open {
            None => open = Some((character, position)),
            Some((marker, _)) if marker == character => open = None,
            Some((marker, start)) => {
                violations.push(unbalanced(
                    marker,
                    path,
                    format!("opened at character {start} but '{character}' opens at character {position} before it closes"),
                ));
                open = Some((character, position));
            }
        }
    }

    if let Some((marker, start)) = open {
        violations.push(unbalanced(
            marker,
            path,
            format!("opened at character {start} is never closed"),
        ));
    }

    violations
}

fn unbalanced(marker: char, path: &FieldPath, detail: String) -> Violation {
    let style = marker_style(marker).unwrap_or("formatting");
    Violation::new(
        Rule::UnbalancedFormatting,
        path,
        format!("{style} marker '{marker}' {detail}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn path() -> FieldPath {
        FieldPath::root().item("components", 0).field("text")
    }

    #[rstest]
    #[case(TextKind::Body, 550)]
    #[case(TextKind::Header, 60)]
    #[case(TextKind::Footer, 60)]
    #[case(TextKind::Button, 20)]
    fn text_at_limit_passes_and_one_more_fails(
        path: FieldPath,
        #[case] kind: TextKind,
        #[case] limit: usize,
    ) {
        let config = ValidationConfig::default();
        assert!(check_char_limit(kind, &"a".repeat(limit), &path, &config).is_none());

        let violation = check_char_limit(kind, &"a".repeat(limit + 1), &path, &config)
            .expect("over-limit text should be reported");
        assert_eq!(violation.rule, Rule::CharLimitExceeded);
        assert!(violation.message.contains(&format!("{limit} character limit")));
        assert!(violation.message.contains(&format!("({} characters)", limit + 1)));
    }

    #[rstest]
    fn multi_byte_text_is_counted_in_characters(path: FieldPath) {
        let config = ValidationConfig::default();
        // 20 characters, 40 bytes.
        let label = "é".repeat(20);
        assert!(check_char_limit(TextKind::Button, &label, &path, &config).is_none());
    }

    #[rstest]
    #[case("no emoji here", 0)]
    #[case("👋", 1)]
    #[case("👍🏿", 1)]
    #[case("👩\u{200d}💻 coding", 1)]
    #[case("🇯🇵🇫🇷", 2)]
    #[case("1\u{fe0f}\u{20e3}", 1)]
    #[case("❤️ and ☀", 1)]
    #[case("☀\u{fe0f}", 1)]
    #[case("✓ ★ ➔", 0)]
    #[case("Rated ★★★★★", 0)]
    #[case("✅ ⭐", 2)]
    #[case("日本語のテキスト", 0)]
    fn emoji_are_counted_per_grapheme(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(count_emoji(text), expected);
    }

    #[rstest]
    fn emoji_limit_counts_across_texts() {
        let config = ValidationConfig::default();
        let path = FieldPath::root().field("components");
        let texts = ["😀😀😀😀😀", "🎉🎉🎉", "🚀🚀"];
        assert!(check_emoji_limit(texts, &path, &config).is_none());

        let over = ["😀😀😀😀😀", "🎉🎉🎉", "🚀🚀", "👍"];
        let violation =
            check_emoji_limit(over, &path, &config).expect("eleven emoji should be reported");
        assert_eq!(violation.rule, Rule::EmojiLimitExceeded);
        assert!(violation.message.contains("11 emoji"));
    }

    #[rstest]
    #[case("This is *bold* and _italic_ and ~gone~")]
    #[case("Line one\nLine two")]
    #[case("No markers at all")]
    fn well_formed_text_passes(path: FieldPath, #[case] text: &str) {
        assert!(check_formatting(text, &path).is_empty());
    }

    #[rstest]
    #[case("Line 1\n\nLine 2")]
    #[case("Line 1\r\n\r\nLine 2")]
    fn consecutive_line_breaks_are_reported(path: FieldPath, #[case] text: &str) {
        let violations = check_formatting(text, &path);
        assert_eq!(violations.len(), 1);
        assert!(violations.iter().all(|v| v.rule == Rule::ConsecutiveLinebreaks));
    }

    #[rstest]
    fn odd_marker_count_is_reported(path: FieldPath) {
        let violations = check_formatting("This is *invalid bold* formatting*", &path);
        assert_eq!(violations.len(), 1);
        let violation = violations.first().expect("one violation");
        assert_eq!(violation.rule, Rule::UnbalancedFormatting);
        assert!(violation.message.contains("bold"));
        assert!(violation.message.contains("character 34"));
    }

    #[rstest]
    fn nested_marker_reports_outer_span(path: FieldPath) {
        let violations = check_formatting("*bold _italic_ text*", &path);
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert!(!violations.is_empty());
        assert!(violations.iter().all(|v| v.rule == Rule::UnbalancedFormatting));
        assert!(messages.iter().any(|m| m.starts_with("bold marker '*' opened at character 1")));
    }
}
