//! Unit tests for the template module.
//!
//! Tests are organised by concern: the orchestrating service, configuration
//! presets, and reading raw JSON input.

mod config_tests;
