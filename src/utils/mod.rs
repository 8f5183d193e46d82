//! Utility functions for code generation and input checks.
//!
//! - [`code_generator`] - Short code generation and collision-checked allocation
//! - [`url_validator`] - Absolute URL validation

pub mod code_generator;
pub mod url_validator;
