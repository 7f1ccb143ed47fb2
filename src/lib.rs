//! Template-lint: compliance checks for messaging-platform message templates.
//!
//! A message template is the reusable, pre-approved layout a business sends to
//! its users. Remote platforms reject definitions that break their rules, and
//! they report one defect per round-trip. This crate inspects a
//! [`template::domain::TemplateDefinition`] locally and reports every
//! violation in a single pass, before anything is submitted.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data types for templates and validation reports
//! - **Ports**: The [`template::ports::validator::TemplateValidator`] trait and
//!   its configuration
//! - **Validation**: Individual checkers and the composite validator service
//!
//! Transport, authentication and submission to the remote platform live in
//! the calling layer.
//!
//! # Modules
//!
//! - [`template`]: Template definitions, checkers and the validation service

pub mod template;
