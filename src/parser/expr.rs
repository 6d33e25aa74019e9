use crate::ast::{
    ast::Expr,
    expressions::{IdentifierExpr, NumberExpr},
};

use super::parser::Parser;

/// Parses the expression starting at the current token.
///
/// Returns `None` when no expression can start with the current token; the
/// caller decides which diagnostic that is.
pub fn parse_expr(parser: &mut Parser) -> Option<Expr> {
    let handler = *parser.get_nud_lookup().get(&parser.current_token_kind())?;
    Some(handler(parser))
}

pub fn parse_number_expr(parser: &mut Parser) -> Expr {
    Expr::Number(NumberExpr {
        token: parser.current_token().clone(),
    })
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Expr {
    Expr::Identifier(IdentifierExpr::new(parser.current_token().clone()))
}
