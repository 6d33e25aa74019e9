use crate::Position;

/// A character cursor over the source text.
///
/// Tracks the byte offset of the current character together with its
/// 1-based line and column. Advancing never produces tokens; the tokenizer
/// decides what a consumed line terminator means.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    /// Byte offset of `current` in `source`
    pos: usize,
    current: Option<char>,
    line: u32,
    col: u32,
}

impl Cursor {
    pub fn new(source: String) -> Self {
        let current = source.chars().next();

        Cursor {
            source,
            pos: 0,
            current,
            line: 1,
            col: 1,
        }
    }

    /// Returns the current character, `None` once the input is exhausted.
    pub fn at(&self) -> Option<char> {
        self.current
    }

    /// Returns the character after the current one without advancing.
    pub fn peek(&self) -> Option<char> {
        let current = self.current?;
        self.source[self.pos + current.len_utf8()..].chars().next()
    }

    /// Moves onto the next character and returns the one consumed.
    ///
    /// Consuming a `\n` moves the cursor to column 1 of the next line.
    pub fn advance(&mut self) -> Option<char> {
        let consumed = self.current?;

        self.pos += consumed.len_utf8();
        self.current = self.source[self.pos..].chars().next();

        if consumed == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }

        Some(consumed)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// The source text from the current character onwards.
    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Position of the current character (or of the end of input).
    pub fn get_position(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
        }
    }

    /// Position of the character just consumed.
    ///
    /// Only meaningful after at least one advance on the current line.
    pub fn last_position(&self) -> Position {
        Position {
            line: self.line,
            col: self.col.saturating_sub(1).max(1),
        }
    }
}
