//! Integration tests for the front end.
//!
//! These tests run source text through tokenization and parsing and check
//! the resulting program, its rendering and its diagnostics.

use mizu::{
    ast::ast::{Node, Stmt},
    format_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

#[test]
fn test_declaration_program_end_to_end() {
    let source = "const x int64 = 314\nconst y := x\n".to_string();

    let tokens = tokenize(source.clone(), Some("test.mz".to_string()));
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    assert_eq!(
        tokens.iter().filter(|token| token.kind == TokenKind::EOL).count(),
        3
    );

    let program = parse(source, Some("test.mz".to_string()));
    assert!(!program.has_errors());
    assert_eq!(
        program.literal(),
        "DeclarationStatement: x int64 314\nDeclarationStatement: y __INFER__ x\n"
    );
}

#[test]
fn test_single_declaration_renders_one_line() {
    for source in ["const a := 1", "const a u8 = 1", "  const   a  :=  b  "] {
        let program = parse(source.to_string(), None);
        let literal = program.literal();

        assert!(literal.ends_with('\n'), "{:?}", source);
        assert_eq!(literal.matches('\n').count(), 1, "{:?}", source);
        assert!(literal.starts_with("DeclarationStatement: a "), "{:?}", source);
    }
}

#[test]
fn test_errors_do_not_stop_parsing() {
    let source = "const 1 := 2\nconst ok := 3\nconst x\n".to_string();
    let program = parse(source.clone(), None);

    assert_eq!(program.error_messages().len(), 2);
    assert_eq!(
        program.error_messages()[0],
        "Error: expected an identifier after constant declaration. 1:5"
    );

    let parsed: Vec<String> = program
        .parsed_statements()
        .map(|statement| match statement {
            Stmt::Declaration(declaration) => declaration.identifier.value.clone(),
        })
        .collect();
    assert_eq!(parsed, vec![String::from("ok")]);

    let rendered = format_error(&program.errors[1], &source, "test.mz");
    assert!(rendered.contains("ExpectedTypeOrWalrus"));
    assert!(rendered.contains("3 | const x"));
}

#[test]
fn test_illegal_tokens_reach_the_parser_as_empty_slots() {
    let program = parse("@ const a := 1".to_string(), None);

    assert_eq!(program.statements.len(), 2);
    assert!(program.statements[0].is_none());
    assert!(program.statements[1].is_some());
    assert!(program.errors.is_empty());
}
