//! Error types and error handling for the parser.
//!
//! This module defines the error types produced while tokenizing and parsing:
//!
//! - Error structures carrying the offending token
//! - Specific error variants for each failure
//! - Helpful error messages and suggestions

pub mod errors;
