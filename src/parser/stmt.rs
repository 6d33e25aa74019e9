use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{DeclarationStmt, INFER_TYPE},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses the statement starting at the current token.
///
/// Returns `None` when no statement starts with the current token.
pub fn parse_stmt(parser: &mut Parser) -> Option<Result<Stmt, Error>> {
    let handler = *parser.get_stmt_lookup().get(&parser.current_token_kind())?;
    Some(handler(parser))
}

/// Parses `const NAME := EXPR` or `const NAME TYPE = EXPR`.
///
/// Entered with the current token on `const`, leaves it on the value.
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    if parser.peek_token_kind() != TokenKind::Identifier {
        return Err(Error::new(ErrorImpl::ExpectedIdentifier, start_token.position));
    }

    parser.advance();
    let identifier = IdentifierExpr::new(parser.current_token().clone());

    let (type_, value) = match parser.peek_token_kind() {
        TokenKind::Walrus => {
            parser.advance();
            parser.advance();

            let type_ = IdentifierExpr::synthesized(INFER_TYPE, parser.current_token());
            let value = parse_expr(parser).ok_or_else(|| {
                Error::new(ErrorImpl::ExpectedExpressionAfterWalrus, parser.get_position())
            })?;

            (type_, value)
        }
        TokenKind::Identifier => {
            parser.advance();
            let type_ = IdentifierExpr::new(parser.current_token().clone());

            // The token between type and value is taken to be `=` without checking
            parser.advance();
            parser.advance();

            let value = parse_expr(parser).ok_or_else(|| {
                Error::new(ErrorImpl::ExpectedExpressionAfterType, parser.get_position())
            })?;

            (type_, value)
        }
        _ => {
            return Err(Error::new(ErrorImpl::ExpectedTypeOrWalrus, parser.get_position()));
        }
    };

    Ok(Stmt::Declaration(DeclarationStmt {
        token: start_token,
        identifier,
        type_,
        value,
    }))
}
