//! Template validation implementation.
//!
//! This module provides the individual checkers, grouped by the part of a
//! template they inspect, and the composite validator service that runs all
//! of them.

pub mod buttons;
pub mod carousel;
pub mod composition;
pub mod fields;
pub mod path;
pub mod service;
pub mod text;
pub mod variables;

pub use path::FieldPath;
pub use service::DefaultTemplateValidator;
