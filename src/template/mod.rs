//! Message template definitions and their validation.
//!
//! # Architecture
//!
//! - **Domain**: Template shape ([`domain::TemplateDefinition`],
//!   [`domain::Component`], [`domain::Button`]) and report types
//!   ([`domain::ValidationResult`], [`domain::Violation`])
//! - **Ports**: [`ports::validator::TemplateValidator`] and
//!   [`ports::validator::ValidationConfig`]
//! - **Validation**: Primitive and structural checkers plus
//!   [`validation::DefaultTemplateValidator`], which runs all of them
//!
//! # Example
//!
//! ```
//! use template_lint::template::domain::{
//!     BodyComponent, Button, ButtonsComponent, Category, Component, TemplateDefinition,
//! };
//! use template_lint::template::ports::validator::TemplateValidator;
//! use template_lint::template::validation::DefaultTemplateValidator;
//!
//! let template = TemplateDefinition::new("order_ready", Category::Utility, "en_US")
//!     .with_component(Component::Body(
//!         BodyComponent::new("Hi {{1}}, your order is ready").with_examples(["Ada"]),
//!     ))
//!     .with_component(Component::Buttons(ButtonsComponent::new([
//!         Button::quick_reply("Thanks"),
//!     ])));
//!
//! let validator = DefaultTemplateValidator::new();
//! let result = validator.validate(&template);
//! assert!(result.is_ok());
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
