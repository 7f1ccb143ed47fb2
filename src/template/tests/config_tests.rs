//! Unit tests for validation configuration.

use crate::template::{
    ports::validator::ValidationConfig,
    validation::{FieldPath, fields::check_phone_number},
};
use rstest::rstest;

#[rstest]
fn default_config_values() {
    let config = ValidationConfig::default();
    assert_eq!(config.max_body_length, 550);
    assert_eq!(config.max_header_length, 60);
    assert_eq!(config.max_footer_length, 60);
    assert_eq!(config.max_button_text_length, 20);
    assert_eq!(config.max_emoji, 10);
    assert_eq!(config.max_buttons, 3);
    assert_eq!(
        (config.min_carousel_cards, config.max_carousel_cards),
        (2, 10)
    );
    assert_eq!(config.max_name_length, 512);
    assert_eq!(config.max_url_length, 2000);
}

#[rstest]
fn lenient_config_relaxes_counts() {
    let config = ValidationConfig::lenient();
    assert!(config.max_emoji > ValidationConfig::default().max_emoji);
    assert!(config.max_buttons > ValidationConfig::default().max_buttons);
    assert_eq!(config.max_body_length, 550);
    assert_eq!(config.min_phone_digits, 7);
}

#[rstest]
fn lenient_config_accepts_short_phone_numbers() {
    let path = FieldPath::root().item("components", 1).field("phoneNumber");
    assert!(check_phone_number("+5551234", &path, &ValidationConfig::lenient()).is_none());
    assert!(check_phone_number("+5551234", &path, &ValidationConfig::default()).is_some());
}

#[rstest]
fn strict_config_has_reduced_limits() {
    let config = ValidationConfig::strict();
    assert_eq!(config.max_body_length, 400);
    assert_eq!(config.max_emoji, 3);
    assert_eq!(config.max_carousel_cards, 5);
}

#[rstest]
fn partial_overrides_keep_defaults() {
    let config: ValidationConfig =
        serde_json::from_str(r#"{"max_emoji": 0, "max_carousel_cards": 4}"#).expect("parse");
    assert_eq!(config.max_emoji, 0);
    assert_eq!(config.max_carousel_cards, 4);
    assert_eq!(config.max_body_length, 550);
}
