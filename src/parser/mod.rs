//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms an
//! `EOF`-terminated token sequence into a Program:
//!
//! - A forward-only token cursor with one token of lookahead
//! - Statement parsing (expression statements)
//! - Expression parsing, with `*` and `/` binding tighter than `+` and `-`
//!   and every operator left-associative
//! - Fail-fast errors carrying the offending token

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod stream;
