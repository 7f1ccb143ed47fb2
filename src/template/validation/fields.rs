//! Checks for individual specialised fields.
//!
//! Each rule is a pure function over one field. Rules return `None` (or an
//! empty list) on success and the violation otherwise.

use super::path::FieldPath;
use crate::template::{
    domain::{HeaderComponent, HeaderKind, Rule, Violation},
    ports::validator::ValidationConfig,
};

/// Fixed opening required of authentication bodies.
pub const AUTHENTICATION_PREFIX: &str = "{{1}} is your verification code";

/// Checks that the template name uses `[a-z0-9_]` and fits the length limit.
#[must_use]
pub fn check_template_name(name: &str, config: &ValidationConfig) -> Option<Violation> {
    let path = FieldPath::root().field("name");

    if name.is_empty() {
        return Some(Violation::new(
            Rule::InvalidTemplateName,
            &path,
            "template name cannot be empty",
        ));
    }

    let is_valid = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !is_valid {
        return Some(Violation::new(
            Rule::InvalidTemplateName,
            &path,
            format!("template name '{name}' must use lowercase letters, digits and underscores only"),
        ));
    }

    let length = name.len();
    (length > config.max_name_length).then(|| {
        Violation::new(
            Rule::InvalidTemplateName,
            &path,
            format!(
                "template name exceeds {} characters ({length} characters)",
                config.max_name_length
            ),
        )
    })
}

/// Checks that the locale tag looks like `en` or `en_US`.
#[must_use]
pub fn check_language_code(language: &str) -> Option<Violation> {
    let (base, region) = match language.split_once('_') {
        Some((base, region)) => (base, Some(region)),
        None => (language, None),
    };

    let base_ok = base.len() == 2 && base.bytes().all(|b| b.is_ascii_lowercase());
    let region_ok = region.is_none_or(|r| r.len() == 2 && r.bytes().all(|b| b.is_ascii_uppercase()));

    if base_ok && region_ok {
        None
    } else {
        Some(Violation::new(
            Rule::InvalidLanguageCode,
            &FieldPath::root().field("language"),
            format!("invalid language code '{language}': expected a form such as en or en_US"),
        ))
    }
}

/// Checks that `url` uses HTTPS and fits the length limit.
#[must_use]
pub fn check_url(url: &str, path: &FieldPath, config: &ValidationConfig) -> Option<Violation> {
    let has_https_host = url
        .split_once("://")
        .is_some_and(|(scheme, rest)| scheme.eq_ignore_ascii_case("https") && !rest.is_empty());
    if !has_https_host {
        return Some(Violation::new(
            Rule::InvalidUrl,
            path,
            format!("URL must use HTTPS: {url}"),
        ));
    }

    let length = url.chars().count();
    (length > config.max_url_length).then(|| {
        Violation::new(
            Rule::InvalidUrl,
            path,
            format!(
                "URL exceeds {} character limit ({length} characters)",
                config.max_url_length
            ),
        )
    })
}

/// Checks that `phone` is `+` followed by digits only, within the digit range.
#[must_use]
pub fn check_phone_number(
    phone: &str,
    path: &FieldPath,
    config: &ValidationConfig,
) -> Option<Violation> {
    let digits = phone.strip_prefix('+');
    let is_valid = digits.is_some_and(|d| {
        d.bytes().all(|b| b.is_ascii_digit())
            && (config.min_phone_digits..=config.max_phone_digits).contains(&d.len())
    });

    (!is_valid).then(|| {
        Violation::new(
            Rule::InvalidPhoneNumber,
            path,
            format!(
                "phone number '{phone}' must be in international format: '+' followed by {} to {} digits",
                config.min_phone_digits, config.max_phone_digits
            ),
        )
    })
}

/// File extensions accepted for each media header kind.
#[must_use]
pub const fn allowed_extensions(kind: HeaderKind) -> &'static [&'static str] {
    match kind {
        HeaderKind::Text => &[],
        HeaderKind::Image => &["jpg", "jpeg", "png"],
        HeaderKind::Video => &["mp4"],
        HeaderKind::Document => &["pdf"],
    }
}

/// Checks the sample media of a media header.
///
/// The file name is matched against the header kind; without one, the path
/// of the sample URL is used instead. A sample URL must use HTTPS.
#[must_use]
pub fn check_media_header(
    header: &HeaderComponent,
    path: &FieldPath,
    config: &ValidationConfig,
) -> Vec<Violation> {
    if !header.kind.is_media() {
        return Vec::new();
    }

    let mut violations = Vec::new();
    let url_path = path.field("mediaUrl");

    if let Some(url) = header.media_url.as_deref() {
        violations.extend(check_url(url, &url_path, config));
    }

    let source = match (header.media_file_name.as_deref(), header.media_url.as_deref()) {
        (Some(file_name), _) => Some((file_name, path.field("mediaFileName"))),
        (None, Some(url)) => Some((strip_query(url), url_path)),
        (None, None) => None,
    };

    if let Some((file_name, source_path)) = source {
        let allowed = allowed_extensions(header.kind);
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        let matches = extension
            .as_deref()
            .is_some_and(|ext| allowed.contains(&ext));
        if !matches {
            violations.push(Violation::new(
                Rule::InvalidMediaFormat,
                &source_path,
                format!(
                    "{} header media '{file_name}' must end with: {}",
                    header.kind,
                    allowed
                        .iter()
                        .map(|ext| format!(".{ext}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }
    }

    violations
}

fn strip_query(url: &str) -> &str {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    without_fragment
        .split_once('?')
        .map_or(without_fragment, |(head, _)| head)
}

/// Checks that an authentication body opens with [`AUTHENTICATION_PREFIX`].
#[must_use]
pub fn check_authentication_body(text: &str, path: &FieldPath) -> Option<Violation> {
    (!text.starts_with(AUTHENTICATION_PREFIX)).then(|| {
        Violation::new(
            Rule::InvalidAuthenticationFormat,
            path,
            format!("authentication template body must start with \"{AUTHENTICATION_PREFIX}\""),
        )
    })
}
