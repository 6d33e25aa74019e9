#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// 1-based line and column of a source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Position { line, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Returns the text of a 1-based line, without its terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth((line as usize).checked_sub(1)?)
        .map(|text| text.trim_end_matches('\r'))
}


/// Renders an error with the offending source line and a caret under its column.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: name (tip)
        -> file.mz:1:5
          |
        1 | const 5 := 1
          | ----^
    */

    let position = error.get_position();
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}:{}\n", file, position));
    output.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line_at_position(source, position.line) {
        output.push_str(&format!("{} | {}\n", line_str, line_text));

        output.push_str(&format!("{:>padding$} {}\n", "|", caret_line(line_text, position.col)));
    }

    output
}

/// A `-` run ending in `^` under 1-based `col`. Tabs before the column are
/// kept so the caret lines up with the source when tabs are expanded.
fn caret_line(line_text: &str, col: u32) -> String {
    let mut caret: String = line_text
        .chars()
        .chain(std::iter::repeat(' '))
        .take((col.max(1) - 1) as usize)
        .map(|c| if c == '\t' { '\t' } else { '-' })
        .collect();
    caret.push('^');
    caret
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    print!("{}", format_error(error, source, file));
}
