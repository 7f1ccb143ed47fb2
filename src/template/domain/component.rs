//! Component types representing the polymorphic parts of a template.
//!
//! Templates carry a "components" array that can include a header, a body,
//! a footer, buttons and a carousel. Carousel cards carry the same parts
//! minus the carousel itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Button, ButtonKind};

/// A single top-level component of a template.
///
/// # Serialisation
///
/// Components are serialised with an upper-case `type` tag:
///
/// ```json
/// { "type": "HEADER", "format": "IMAGE", "mediaFileName": "promo.png" }
/// { "type": "BODY", "text": "Hi {{1}}", "variableExamples": ["Ada"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Component {
    /// Optional header, text or media.
    Header(HeaderComponent),
    /// Main message text.
    Body(BodyComponent),
    /// Small print below the body.
    Footer(FooterComponent),
    /// Interactive buttons.
    Buttons(ButtonsComponent),
    /// Horizontally scrolling cards.
    Carousel(CarouselComponent),
}

impl Component {
    /// Returns the kind of this component.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Header(_) => ComponentKind::Header,
            Self::Body(_) => ComponentKind::Body,
            Self::Footer(_) => ComponentKind::Footer,
            Self::Buttons(_) => ComponentKind::Buttons,
            Self::Carousel(_) => ComponentKind::Carousel,
        }
    }
}

/// A component allowed inside a carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardComponent {
    /// Card header, normally media.
    Header(HeaderComponent),
    /// Card text.
    Body(BodyComponent),
    /// Card footer.
    Footer(FooterComponent),
    /// Card buttons.
    Buttons(ButtonsComponent),
}

impl CardComponent {
    /// Returns the kind of this component.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Header(_) => ComponentKind::Header,
            Self::Body(_) => ComponentKind::Body,
            Self::Footer(_) => ComponentKind::Footer,
            Self::Buttons(_) => ComponentKind::Buttons,
        }
    }
}

/// Discriminant of a component, used for composition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentKind {
    /// See [`Component::Header`].
    Header,
    /// See [`Component::Body`].
    Body,
    /// See [`Component::Footer`].
    Footer,
    /// See [`Component::Buttons`].
    Buttons,
    /// See [`Component::Carousel`].
    Carousel,
}

impl ComponentKind {
    /// Returns the upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "HEADER",
            Self::Body => "BODY",
            Self::Footer => "FOOTER",
            Self::Buttons => "BUTTONS",
            Self::Carousel => "CAROUSEL",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeaderKind {
    /// Plain text header.
    Text,
    /// Image header (jpg, jpeg, png).
    Image,
    /// Video header (mp4).
    Video,
    /// Document header (pdf).
    Document,
}

impl HeaderKind {
    /// Returns the upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Document => "DOCUMENT",
        }
    }

    /// Returns `true` for image, video and document headers.
    #[must_use]
    pub const fn is_media(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template or card header.
///
/// # Examples
///
/// ```
/// use template_lint::template::domain::{HeaderComponent, HeaderKind};
///
/// let header = HeaderComponent::new_media(HeaderKind::Image, "promo.png");
/// assert!(header.kind.is_media());
/// assert_eq!(header.text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderComponent {
    /// Header format.
    #[serde(alias = "format")]
    pub kind: HeaderKind,
    /// Header text, used when the format is `TEXT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// File name of the sample media for media headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_file_name: Option<String>,
    /// Sample media URL for media headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Example values for placeholders in the header text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable_examples: Vec<String>,
}

impl HeaderComponent {
    /// Creates a text header.
    #[must_use]
    pub fn new_text(text: impl Into<String>) -> Self {
        Self {
            kind: HeaderKind::Text,
            text: Some(text.into()),
            media_file_name: None,
            media_url: None,
            variable_examples: Vec::new(),
        }
    }

    /// Creates a media header with a sample file name.
    #[must_use]
    pub fn new_media(kind: HeaderKind, file_name: impl Into<String>) -> Self {
        Self {
            kind,
            text: None,
            media_file_name: Some(file_name.into()),
            media_url: None,
            variable_examples: Vec::new(),
        }
    }

    /// Sets the sample media URL.
    #[must_use]
    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    /// Sets example values for header placeholders.
    #[must_use]
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variable_examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the header text for `TEXT` headers.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            HeaderKind::Text => self.text.as_deref(),
            HeaderKind::Image | HeaderKind::Video | HeaderKind::Document => None,
        }
    }
}

/// The required main text of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyComponent {
    /// Body text, possibly containing `{{N}}` placeholders.
    pub text: String,
    /// One example value per placeholder, in placeholder order.
    #[serde(default)]
    pub variable_examples: Vec<String>,
}

impl BodyComponent {
    /// Creates a body without examples.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variable_examples: Vec::new(),
        }
    }

    /// Sets example values for body placeholders.
    #[must_use]
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variable_examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

/// Footer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterComponent {
    /// Footer text.
    pub text: String,
}

impl FooterComponent {
    /// Creates a footer.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Ordered list of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonsComponent {
    /// Buttons in display order.
    #[serde(alias = "items")]
    pub buttons: Vec<Button>,
}

impl ButtonsComponent {
    /// Creates a buttons component.
    #[must_use]
    pub fn new(buttons: impl IntoIterator<Item = Button>) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
        }
    }

    /// Returns the button kinds in display order.
    #[must_use]
    pub fn kinds(&self) -> Vec<ButtonKind> {
        self.buttons.iter().map(Button::kind).collect()
    }
}

/// Carousel of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselComponent {
    /// Cards in display order.
    pub cards: Vec<Card>,
}

impl CarouselComponent {
    /// Creates a carousel.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }
}

/// One carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card components in declaration order.
    #[serde(default)]
    pub components: Vec<CardComponent>,
}

impl Card {
    /// Creates a card.
    #[must_use]
    pub fn new(components: impl IntoIterator<Item = CardComponent>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }
}
