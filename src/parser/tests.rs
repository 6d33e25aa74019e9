//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Constant declarations in both forms
//! - Expressions in value position
//! - Error collection and empty statement slots
//! - The one-token advance between top-level statements

use pretty_assertions::assert_eq;

use super::parser::{parse, Parser};
use crate::{
    ast::{
        ast::{Expr, ExprType, Node, Stmt, StmtType},
        statements::{DeclarationStmt, INFER_TYPE},
    },
    errors::errors::ErrorImpl,
    lexer::{lexer::Tokenizer, tokens::TokenKind},
    Position,
};

fn declaration(statement: &Option<Stmt>) -> &DeclarationStmt {
    match statement {
        Some(Stmt::Declaration(declaration)) => declaration,
        None => panic!("expected a declaration, found an empty slot"),
    }
}

#[test]
fn test_parse_typed_declaration() {
    let program = parse("const x int64 = 314".to_string(), None);

    assert!(program.errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    let declaration = declaration(&program.statements[0]);
    assert_eq!(declaration.identifier.value, "x");
    assert_eq!(declaration.type_.value, "int64");
    assert!(!declaration.is_inferred());
    assert_eq!(declaration.token.kind, TokenKind::Const);

    match &declaration.value {
        Expr::Number(number) => {
            assert_eq!(number.token.kind, TokenKind::Number);
            assert_eq!(number.token.value, "314");
        }
        other => panic!("expected a number, found {:?}", other),
    }
}

#[test]
fn test_parse_walrus_declaration() {
    let program = parse("const x := 5".to_string(), None);

    assert!(program.errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    let declaration = declaration(&program.statements[0]);
    assert_eq!(declaration.identifier.value, "x");
    assert_eq!(declaration.type_.value, INFER_TYPE);
    assert_eq!(declaration.type_.token.kind, TokenKind::Identifier);
    assert!(declaration.is_inferred());
    assert_eq!(declaration.value.get_expr_type(), ExprType::Number);
    assert_eq!(declaration.value.literal(), "5");
}

#[test]
fn test_parse_identifier_value() {
    let program = parse("const y := x".to_string(), None);

    let declaration = declaration(&program.statements[0]);
    match &declaration.value {
        Expr::Identifier(identifier) => {
            assert_eq!(identifier.value, "x");
            assert_eq!(identifier.token.value, "x");
        }
        other => panic!("expected an identifier, found {:?}", other),
    }
    assert_eq!(declaration.value.get_position(), Position::new(1, 12));
}

#[test]
fn test_parse_missing_walrus_value() {
    let program = parse("const x :=".to_string(), None);

    assert_eq!(program.statements.len(), 1);
    assert!(program.statements[0].is_none());
    assert_eq!(program.errors.len(), 1);
    assert!(program.errors[0]
        .to_string()
        .contains("expected an expression after walrus"));
    // Reported at the token the value was expected at, here EOF
    assert_eq!(*program.errors[0].get_position(), Position::new(1, 11));
}

#[test]
fn test_parse_missing_typed_value() {
    let program = parse("const x int =".to_string(), None);

    assert_eq!(program.statements, vec![None]);
    assert_eq!(program.errors.len(), 1);
    assert_eq!(
        program.errors[0].get_kind(),
        &ErrorImpl::ExpectedExpressionAfterType
    );
}

#[test]
fn test_parse_non_identifier_after_const() {
    let program = parse("const 5 := 1".to_string(), None);

    assert_eq!(program.errors.len(), 1);
    assert_eq!(
        program.errors[0].to_string(),
        "Error: expected an identifier after constant declaration. 1:5"
    );
    assert!(program.statements[0].is_none());
}

#[test]
fn test_parse_missing_type_or_walrus() {
    let program = parse("const x".to_string(), None);

    assert_eq!(program.statements, vec![None]);
    assert_eq!(
        program.error_messages(),
        vec![String::from(
            "Error: expected a type or a walrus (:=) after identifier in constant declaration. 1:7"
        )]
    );
}

#[test]
fn test_value_must_be_an_expression() {
    let program = parse("const x := (".to_string(), None);

    assert_eq!(program.errors.len(), 1);
    assert_eq!(
        program.errors[0].get_kind(),
        &ErrorImpl::ExpectedExpressionAfterWalrus
    );
    assert_eq!(*program.errors[0].get_position(), Position::new(1, 12));
}

#[test]
fn test_parse_multiple_declarations() {
    let source = "const a := 1\nconst b int = 2\nconst c := a".to_string();
    let program = parse(source, None);

    assert!(program.errors.is_empty());
    assert_eq!(program.statements.len(), 3);

    let names: Vec<&str> = program
        .parsed_statements()
        .map(|statement| match statement {
            Stmt::Declaration(declaration) => declaration.identifier.value.as_str(),
        })
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(program
        .parsed_statements()
        .all(|statement| statement.get_stmt_type() == StmtType::DeclarationStmt));
}

#[test]
fn test_non_statement_tokens_get_empty_slots() {
    let program = parse("x 5 +".to_string(), None);

    assert_eq!(program.statements, vec![None, None, None]);
    assert!(program.errors.is_empty());
}

#[test]
fn test_failed_declaration_advances_one_token() {
    // After the failure at `const`, each of `5`, `:=` and `1` gets its own slot
    let program = parse("const 5 := 1\nconst y := 2".to_string(), None);

    assert_eq!(program.statements.len(), 5);
    assert!(program.statements[..4].iter().all(|slot| slot.is_none()));
    assert_eq!(declaration(&program.statements[4]).identifier.value, "y");
    assert_eq!(program.errors.len(), 1);
}

#[test]
fn test_type_and_value_separator_is_not_checked() {
    let program = parse("const x int 7 9".to_string(), None);

    let declaration = declaration(&program.statements[0]);
    assert_eq!(declaration.type_.value, "int");
    assert_eq!(declaration.value.literal(), "9");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_empty_source() {
    let program = parse(String::new(), None);

    assert!(program.statements.is_empty());
    assert!(program.errors.is_empty());
    assert_eq!(program.literal(), "");
}

#[test]
fn test_program_literal() {
    let program = parse("const x int64 = 314".to_string(), None);
    assert_eq!(program.literal(), "DeclarationStatement: x int64 314\n");

    let program = parse("const x := y".to_string(), None);
    assert_eq!(program.literal(), "DeclarationStatement: x __INFER__ y\n");
}

#[test]
fn test_program_literal_skips_failed_slots() {
    let program = parse("const a := 1\nconst :=\nconst b := 2".to_string(), None);

    assert_eq!(
        program.literal(),
        "DeclarationStatement: a __INFER__ 1\nDeclarationStatement: b __INFER__ 2\n"
    );
    assert!(program.has_errors());
}

#[test]
fn test_parser_window() {
    let mut parser = Parser::new(Tokenizer::new("const x := 5".to_string(), None));

    assert_eq!(parser.current_token_kind(), TokenKind::Const);
    assert_eq!(parser.peek_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.peek_token().value, "x");

    parser.advance();
    assert_eq!(parser.current_token().value, "x");
    assert_eq!(parser.peek_token_kind(), TokenKind::Walrus);
    assert_eq!(parser.get_position(), Position::new(1, 7));
}

#[test]
fn test_parser_tokenizer_keeps_eol_markers() {
    let mut parser = Parser::new(Tokenizer::new("const a := 1\nconst b := 2".to_string(), None));
    let program = parser.parse_program();

    assert_eq!(program.statements.len(), 2);
    let eols = parser
        .get_tokenizer()
        .tokens()
        .iter()
        .filter(|token| token.kind == TokenKind::EOL)
        .count();
    assert_eq!(eols, 2);
}

#[test]
fn test_program_error_records_position() {
    let mut program = crate::ast::ast::Program::new();
    program.error(ErrorImpl::ExpectedTypeOrWalrus, Position::new(4, 2));

    assert!(program.has_errors());
    assert_eq!(program.errors[0].get_position(), &Position::new(4, 2));
    assert!(program.error_messages()[0].ends_with(". 4:2"));
}
