use crate::lexer::tokens::{Token, TokenKind};

use super::ast::Node;

/// Identifier Expression
/// A name, with its text cached from the token.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

impl IdentifierExpr {
    pub fn new(token: Token) -> Self {
        IdentifierExpr {
            value: token.value.clone(),
            token,
        }
    }

    /// An identifier that does not come from the source, placed at `token`'s position.
    pub fn synthesized(value: &str, at: &Token) -> Self {
        IdentifierExpr::new(Token {
            kind: TokenKind::Identifier,
            value: String::from(value),
            position: at.position,
        })
    }
}

impl Node for IdentifierExpr {
    fn literal(&self) -> String {
        self.token.value.clone()
    }
}

/// Number Expression
/// A numeric literal. The digits stay as source text.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub token: Token,
}

impl Node for NumberExpr {
    fn literal(&self) -> String {
        self.token.value.clone()
    }
}
