//! Button variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An interactive template button.
///
/// Serialised with the platform's `type` tag:
///
/// ```json
/// { "type": "QUICK_REPLY", "text": "Stop" }
/// { "type": "URL", "text": "Track", "url": "https://example.com/track" }
/// { "type": "PHONE_NUMBER", "text": "Call us", "phoneNumber": "+15551234567" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Button {
    /// Sends a canned reply.
    QuickReply(QuickReplyButton),
    /// Opens a web page.
    Url(UrlButton),
    /// Starts a phone call.
    PhoneNumber(PhoneButton),
}

impl Button {
    /// Creates a quick-reply button.
    #[must_use]
    pub fn quick_reply(text: impl Into<String>) -> Self {
        Self::QuickReply(QuickReplyButton { text: text.into() })
    }

    /// Creates a URL button.
    #[must_use]
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Url(UrlButton {
            text: text.into(),
            url: url.into(),
        })
    }

    /// Creates a phone button.
    #[must_use]
    pub fn phone(text: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self::PhoneNumber(PhoneButton {
            text: text.into(),
            phone_number: phone_number.into(),
        })
    }

    /// Returns the button label.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::QuickReply(button) => &button.text,
            Self::Url(button) => &button.text,
            Self::PhoneNumber(button) => &button.text,
        }
    }

    /// Returns the kind of this button.
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self {
            Self::QuickReply(_) => ButtonKind::QuickReply,
            Self::Url(_) => ButtonKind::Url,
            Self::PhoneNumber(_) => ButtonKind::PhoneNumber,
        }
    }
}

/// Quick-reply button payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReplyButton {
    /// Button label.
    pub text: String,
}

/// URL button payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlButton {
    /// Button label.
    pub text: String,
    /// Target URL.
    pub url: String,
}

/// Phone button payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneButton {
    /// Button label.
    pub text: String,
    /// Number to dial in international format.
    #[serde(alias = "phone_number")]
    pub phone_number: String,
}

/// Discriminant of a button, used for combination checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonKind {
    /// See [`Button::QuickReply`].
    QuickReply,
    /// See [`Button::Url`].
    Url,
    /// See [`Button::PhoneNumber`].
    PhoneNumber,
}

impl ButtonKind {
    /// Returns the upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickReply => "QUICK_REPLY",
            Self::Url => "URL",
            Self::PhoneNumber => "PHONE_NUMBER",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
