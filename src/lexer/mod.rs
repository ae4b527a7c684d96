//! Lexical analysis module.
//!
//! Token definitions shared by the parser, plus a small regex-driven
//! tokenizer that turns arithmetic text into a token sequence:
//!
//! - Numeric literals, kept as their source text
//! - The four operators `+ - * /`
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
