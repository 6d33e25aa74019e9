//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing functions.
//! The parser pulls tokens from a [`Tokenizer`] on demand and only ever
//! looks at two of them: the current token and the one after it.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for expressions

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the tokenizer it reads from, the two-token window and
/// the lookup tables for statements and expressions.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    tokenizer: Tokenizer,
    /// The token being parsed
    cur: Token,
    /// The token after `cur`
    peek: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser reading from `tokenizer`.
    ///
    /// Fills the two-token window and registers all handlers, so the
    /// current token is the first token of the source.
    pub fn new(mut tokenizer: Tokenizer) -> Self {
        let cur = tokenizer.next_token();
        let peek = tokenizer.next_token();

        let mut parser = Parser {
            tokenizer,
            cur,
            peek,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the window by one token, pulling a new one from the tokenizer.
    pub fn advance(&mut self) {
        let next = self.tokenizer.next_token();
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    /// The tokenizer being read from, including its buffered EOL markers.
    pub fn get_tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for expressions starting with it
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.cur.position
    }

    /// Parses top-level statements until EOF.
    ///
    /// Every token that is not EOF at statement position gets a slot: a
    /// parsed statement, or `None` when there is no handler for it or its
    /// handler failed. After each slot the window moves exactly one token,
    /// no matter how far the handler got.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while self.current_token_kind() != TokenKind::EOF {
            let statement = match parse_stmt(self) {
                Some(Ok(statement)) => Some(statement),
                Some(Err(error)) => {
                    program.errors.push(error);
                    None
                }
                None => None,
            };

            program.statements.push(statement);
            self.advance();
        }

        program
    }
}

/// Parses a source text into a Program.
///
/// This is the main entry point for parsing. Never fails: diagnostics are
/// collected in [`Program::errors`].
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Optional name of the source, `"shell"` when absent
pub fn parse(source: String, file: Option<String>) -> Program {
    let mut parser = Parser::new(Tokenizer::new(source, file));
    parser.parse_program()
}
