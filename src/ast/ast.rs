use std::fmt::Debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    expressions::{IdentifierExpr, NumberExpr},
    statements::DeclarationStmt,
};

/// Node Trait
///
/// Every AST node can render a textual literal of the source it came from.
pub trait Node: Debug {
    /// Returns the literal rendering of the node.
    fn literal(&self) -> String;
}

/// Statement Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StmtType {
    DeclarationStmt,
}

/// Top-level program units.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(DeclarationStmt),
}

impl Stmt {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Declaration(_) => StmtType::DeclarationStmt,
        }
    }
}

impl Node for Stmt {
    fn literal(&self) -> String {
        match self {
            Stmt::Declaration(declaration) => declaration.literal(),
        }
    }
}

/// Expression Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ExprType {
    Identifier,
    Number,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Number(NumberExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Number(_) => ExprType::Number,
        }
    }

    /// Returns the position of the token the expression was built from.
    pub fn get_position(&self) -> Position {
        match self {
            Expr::Identifier(identifier) => identifier.token.position,
            Expr::Number(number) => number.token.position,
        }
    }
}

impl Node for Expr {
    fn literal(&self) -> String {
        match self {
            Expr::Identifier(identifier) => identifier.literal(),
            Expr::Number(number) => number.literal(),
        }
    }
}

/// The root of a parse.
///
/// `statements` holds one slot per top-level construct the parser attempted,
/// in source order. A slot is `None` when that construct failed to parse; the
/// reason is in `errors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Option<Stmt>>,
    pub errors: Vec<Error>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            statements: vec![],
            errors: vec![],
        }
    }

    /// Records a diagnostic at the given position.
    pub fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error_impl, position));
    }

    /// The statements that parsed successfully.
    pub fn parsed_statements(&self) -> impl Iterator<Item = &Stmt> {
        self.statements.iter().flatten()
    }

    /// Every error rendered as `Error: <message>. <line>:<col>`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Node for Program {
    /// One line per parsed statement; failed slots render nothing.
    fn literal(&self) -> String {
        self.parsed_statements()
            .map(|statement| statement.literal() + "\n")
            .collect()
    }
}
