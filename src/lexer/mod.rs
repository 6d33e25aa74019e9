//! Lexical analysis module.
//!
//! Converts source text into classified tokens. It handles:
//!
//! - Recognition of keywords, identifiers and numbers
//! - One- and two-character operators and punctuation
//! - Line/column tracking for every token
//! - EOL markers at line terminators and before end of input
//!
//! Unrecognised characters become `ILLEGAL` tokens; lexing never fails.

pub mod cursor;
pub mod lexer;
pub mod tokens;
