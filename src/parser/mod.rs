//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the
//! tokenizer's output into a `Program`. It handles:
//!
//! - Constant declarations, with inferred (`:=`) or named types
//! - Identifier and number expressions
//! - Collecting errors on the program instead of stopping
//!
//! Statement and expression parsing dispatch on the current token kind
//! through lookup tables registered in `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
