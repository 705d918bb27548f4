//! Core utilities for the typesharing schema compiler.
//!
//! This crate provides the small, stateless helpers shared by the schema
//! validator, the code generators and the CLI.

mod file;
mod reserved;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Generated names
pub use reserved::{PYTHON_RESERVED, escape_python_name, python_field_name};
// String utilities
pub use utils::{
    is_decimal_literal, is_identifier, parse_iso_date, to_camel_case, to_snake_case,
};
