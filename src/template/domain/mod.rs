//! Domain types for the template subsystem.
//!
//! This module contains pure data types with no infrastructure dependencies.
//! Templates are built by the calling layer, validated, and discarded; nothing
//! here is persisted or mutated by the validator.

mod button;
mod component;
mod definition;
mod report;

pub use button::{Button, ButtonKind, PhoneButton, QuickReplyButton, UrlButton};
pub use component::{
    BodyComponent, ButtonsComponent, Card, CardComponent, CarouselComponent, Component,
    ComponentKind, FooterComponent, HeaderComponent, HeaderKind,
};
pub use definition::{Category, ParseCategoryError, TemplateDefinition};
pub use report::{Rule, Severity, ValidationResult, Violation};
