use std::rc::Rc;

use crate::MK_TOKEN;

use super::{
    cursor::Cursor,
    tokens::{Token, TokenKind, COMPOUND_LOOKUP, IDENTIFIER_PATTERN, NUMBER_PATTERN, RESERVED_LOOKUP, SYMBOL_LOOKUP},
};

/// Pull-based tokenizer.
///
/// Tokens are produced one at a time by [`Tokenizer::next_token`]. Line
/// terminators skipped between tokens, and the end of input, leave EOL
/// markers in the tokenizer's own buffer; [`Tokenizer::lex`] drains the whole
/// input into that same buffer so the markers land in source order.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    cursor: Cursor,
    tokens: Vec<Token>,
    file: Rc<String>,
    finished: bool,
}

impl Tokenizer {
    pub fn new(source: String, file: Option<String>) -> Tokenizer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Tokenizer {
            cursor: Cursor::new(source),
            tokens: vec![],
            file: file_name,
            finished: false,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Every token buffered so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The character following the current one.
    pub fn peek_char(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// Produces the next token, skipping any whitespace before it.
    ///
    /// Once the input is exhausted every further call returns EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(current) = self.cursor.at() else {
            return self.end_of_input();
        };

        let identifier = IDENTIFIER_PATTERN
            .find(self.cursor.remainder())
            .map(|found| found.as_str().to_string());
        if let Some(value) = identifier {
            return self.read_identifier(value);
        }

        let number = NUMBER_PATTERN
            .find(self.cursor.remainder())
            .map(|found| found.as_str().to_string());
        if let Some(value) = number {
            return self.read_number(value);
        }

        self.read_symbol(current)
    }

    /// Tokenizes the rest of the input into the buffer, EOF included.
    pub fn lex(&mut self) {
        loop {
            let token = self.next_token();

            if token.kind == TokenKind::EOF {
                if self.tokens.last().map(|last| last.kind) != Some(TokenKind::EOF) {
                    self.push(token);
                }
                break;
            }

            self.push(token);
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(current) = self.cursor.at() {
            if !current.is_whitespace() {
                break;
            }

            if current == '\n' {
                let eol = MK_TOKEN!(TokenKind::EOL, String::from("\n"), self.cursor.get_position());
                self.push(eol);
            }

            self.cursor.advance();
        }
    }

    fn end_of_input(&mut self) -> Token {
        let position = self.cursor.get_position();

        // The trailing EOL is only synthesized the first time EOF is reached
        if !self.finished {
            self.finished = true;
            self.push(MK_TOKEN!(TokenKind::EOL, String::from("\n"), position));
        }

        MK_TOKEN!(TokenKind::EOF, String::new(), position)
    }

    fn read_identifier(&mut self, value: String) -> Token {
        self.cursor.advance_n(value.chars().count());

        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, value, self.cursor.last_position())
    }

    fn read_number(&mut self, value: String) -> Token {
        self.cursor.advance_n(value.chars().count());
        MK_TOKEN!(TokenKind::Number, value, self.cursor.last_position())
    }

    fn read_symbol(&mut self, current: char) -> Token {
        if let Some(kind) = SYMBOL_LOOKUP.get(&current) {
            self.cursor.advance();
            return MK_TOKEN!(*kind, current.to_string(), self.cursor.last_position());
        }

        if let Some((single, pairs)) = COMPOUND_LOOKUP.get(&current) {
            let next = self.cursor.peek();

            if let Some((second, kind)) = pairs.iter().find(|(second, _)| Some(*second) == next) {
                self.cursor.advance_n(2);
                return MK_TOKEN!(*kind, format!("{}{}", current, second), self.cursor.last_position());
            }

            self.cursor.advance();
            return MK_TOKEN!(
                single.unwrap_or(TokenKind::Illegal),
                current.to_string(),
                self.cursor.last_position()
            );
        }

        self.cursor.advance();
        MK_TOKEN!(TokenKind::Illegal, current.to_string(), self.cursor.last_position())
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    /// Yields tokens up to and including the first EOF.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        Some(self.next_token())
    }
}

/// Tokenizes a whole source text, returning the buffered token stream.
///
/// The stream always ends with an EOL token followed by EOF.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source, file);
    tokenizer.lex();
    tokenizer.into_tokens()
}
