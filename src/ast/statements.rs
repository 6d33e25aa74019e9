use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node},
    expressions::IdentifierExpr,
};

/// Sentinel type name of a declaration written with `:=`.
pub const INFER_TYPE: &str = "__INFER__";

/// `const <name> <type> = <value>` or `const <name> := <value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStmt {
    /// The `const` token the declaration starts at
    pub token: Token,
    pub identifier: IdentifierExpr,
    /// Named type, or the `__INFER__` sentinel for walrus declarations
    pub type_: IdentifierExpr,
    pub value: Expr,
}

impl DeclarationStmt {
    pub fn is_inferred(&self) -> bool {
        self.type_.value == INFER_TYPE
    }
}

impl Node for DeclarationStmt {
    fn literal(&self) -> String {
        format!(
            "DeclarationStatement: {} {} {}",
            self.identifier.literal(),
            self.type_.literal(),
            self.value.literal()
        )
    }
}
