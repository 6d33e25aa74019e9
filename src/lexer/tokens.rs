use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, MK_TOKEN};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map.insert("fn", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("null", TokenKind::Null);
        map.insert("import", TokenKind::Import);
        map.insert("const", TokenKind::Const);
        map.insert("declare", TokenKind::Declare);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert('[', TokenKind::LBrack);
        map.insert(']', TokenKind::RBrack);
        map.insert(',', TokenKind::Comma);
        map.insert('.', TokenKind::Dot);
        map.insert(';', TokenKind::Semic);
        map.insert('?', TokenKind::QMark);
        map.insert('"', TokenKind::DoubleQ);
        map.insert('\'', TokenKind::SingleQ);
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Mul);
        map.insert('/', TokenKind::Div);
        map.insert('%', TokenKind::Mod);
        map.insert('^', TokenKind::Pow);
        map
    };

    /// Symbols that may merge with the following character.
    ///
    /// Each entry maps a leading character to the kind it has on its own
    /// (`None` when the bare character is illegal) and the two-character
    /// forms it can start.
    pub static ref COMPOUND_LOOKUP: HashMap<char, (Option<TokenKind>, Vec<(char, TokenKind)>)> = {
        let mut map = HashMap::new();
        map.insert(':', (Some(TokenKind::Colon), vec![('=', TokenKind::Walrus), (':', TokenKind::DColon)]));
        map.insert('=', (Some(TokenKind::Assign), vec![('=', TokenKind::Equal)]));
        map.insert('>', (Some(TokenKind::Greater), vec![('=', TokenKind::GreaterEqual)]));
        map.insert('<', (Some(TokenKind::Less), vec![('=', TokenKind::LessEqual)]));
        // Negation is not part of the language, only `!=` is.
        map.insert('!', (None, vec![('=', TokenKind::NotEqual)]));
        map
    };

    pub static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^\p{L}[\p{L}\p{Nd}_]*").unwrap();
    pub static ref NUMBER_PATTERN: Regex = Regex::new(r"^\p{Nd}+").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    EOL,
    Comment,

    Identifier,
    Number,
    Boolean,
    Rune,
    Function,

    If,
    Else,
    Return,
    For,
    While,
    Break,
    Continue,
    Null,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    Comma,
    Dot,
    Colon,
    DColon,
    Semic,
    QMark,
    DoubleQ,
    SingleQ,

    Walrus, // :=
    Assign, // =
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Pow,

    Equal,
    StrictEqual,
    NotEqual,
    StrictNotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    And,
    Or,
    Not,

    Import,
    Const,
    Declare,
}

impl TokenKind {
    /// The tag the kind is known by in token dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::EOL => "EOL",
            TokenKind::Comment => "COMMENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Rune => "RUNE",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Null => "NULL",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBrack => "LBRACK",
            TokenKind::RBrack => "RBRACK",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::DColon => "DCOLON",
            TokenKind::Semic => "SEMIC",
            TokenKind::QMark => "QMARK",
            TokenKind::DoubleQ => "DOUBLEQ",
            TokenKind::SingleQ => "SINGLEQ",
            TokenKind::Walrus => "WALRUS",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Pow => "POW",
            TokenKind::Equal => "EQUAL",
            TokenKind::StrictEqual => "STRICT_EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::StrictNotEqual => "STRICT_NOT_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Import => "IMPORT",
            TokenKind::Const => "CONST",
            TokenKind::Declare => "DECLARE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{\n\tType: \"{}\",\n\tLiteral: \"{}\",\n\tLine: {},\n\tCol: {}\n}}",
            self.kind,
            self.value.escape_debug(),
            self.position.line,
            self.position.col
        )
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, col: u32) -> Self {
        MK_TOKEN!(kind, value.into(), Position { line, col })
    }
}
