//! Unit tests for the parser module.
//!
//! This module contains tests for parsing call statements, argument
//! lists, multiple statements and the parse error cases.

use std::sync::Arc;

use crate::{
    ast::{ast::{Node, NodeType}, statements::Program},
    errors::errors::{Error, ErrorImpl, ErrorStage},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source.to_string(), Some("test.cs".to_string())).unwrap();
    parse(tokens, Arc::new("test.cs".to_string()))
}

fn program(node: &Node) -> &Program {
    match node {
        Node::Program(program) => program,
        other => panic!("Expected program, found {:?}", other),
    }
}

/// Flattens a call statement into its callee and argument values.
fn call_parts(node: &Node) -> (&str, Vec<&str>) {
    match node {
        Node::CallExpression(call) => {
            let arguments = call
                .arguments
                .iter()
                .map(|argument| match argument {
                    Node::StringLiteral(string) => string.value.as_str(),
                    other => panic!("Expected string literal, found {:?}", other),
                })
                .collect();
            (call.callee.as_str(), arguments)
        }
        other => panic!("Expected call expression, found {:?}", other),
    }
}

#[test]
fn test_parse_single_call() {
    let ast = parse_source("println('hello')").unwrap();
    let program = program(&ast);

    assert_eq!(program.body.len(), 1);
    assert_eq!(call_parts(&program.body[0]), ("println", vec!["hello"]));
}

#[test]
fn test_parse_call_without_arguments() {
    let ast = parse_source("flush()").unwrap();

    assert_eq!(call_parts(&program(&ast).body[0]), ("flush", vec![]));
}

#[test]
fn test_parse_multiple_arguments() {
    let ast = parse_source("log('a', \"b\", 'c')").unwrap();

    assert_eq!(
        call_parts(&program(&ast).body[0]),
        ("log", vec!["a", "b", "c"])
    );
}

#[test]
fn test_parse_multiple_statements() {
    let ast = parse_source("first('1')\nsecond('2') third()").unwrap();
    let program = program(&ast);

    assert_eq!(program.body.len(), 3);
    assert_eq!(call_parts(&program.body[0]), ("first", vec!["1"]));
    assert_eq!(call_parts(&program.body[1]), ("second", vec!["2"]));
    assert_eq!(call_parts(&program.body[2]), ("third", vec![]));
}

#[test]
fn test_parse_empty_program() {
    let ast = parse_source("").unwrap();

    assert_eq!(ast.get_node_type(), NodeType::Program);
    assert!(program(&ast).body.is_empty());
}

#[test]
fn test_call_span_covers_whole_call() {
    let ast = parse_source("  say( 'x' )").unwrap();
    let call = &program(&ast).body[0];

    assert_eq!(call.get_span().start.0, 2);
    assert_eq!(call.get_span().end.0, 12);
}

#[test]
fn test_parse_handwritten_tokens_without_eof() {
    let file = Arc::new("test.cs".to_string());
    let span = |start: u32, end: u32| Span {
        start: Position(start, Arc::clone(&file)),
        end: Position(end, Arc::clone(&file)),
    };
    let tokens = vec![
        Token { kind: TokenKind::Identifier, value: "f".to_string(), span: span(0, 1) },
        Token { kind: TokenKind::OpenParen, value: "(".to_string(), span: span(1, 2) },
        Token { kind: TokenKind::CloseParen, value: ")".to_string(), span: span(2, 3) },
    ];

    let ast = parse(tokens, Arc::clone(&file)).unwrap();
    assert_eq!(call_parts(&program(&ast).body[0]), ("f", vec![]));

    let ast = parse(vec![], file).unwrap();
    assert!(program(&ast).body.is_empty());
}

#[test]
fn test_tokens_after_early_eof_are_rejected() {
    let file = Arc::new("test.cs".to_string());
    let token = |kind: TokenKind, value: &str, start: u32| Token {
        kind,
        value: value.to_string(),
        span: Span {
            start: Position(start, Arc::clone(&file)),
            end: Position(start + value.len() as u32, Arc::clone(&file)),
        },
    };
    let tokens = vec![
        token(TokenKind::EOF, "", 0),
        token(TokenKind::Identifier, "g", 1),
        token(TokenKind::OpenParen, "(", 2),
    ];

    let error = parse(tokens, Arc::clone(&file)).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "end of input".to_string(),
            received: "g".to_string()
        }
    );
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_repeated_eof_tokens_are_accepted() {
    let file = Arc::new("test.cs".to_string());
    let eof = Token {
        kind: TokenKind::EOF,
        value: "EOF".to_string(),
        span: Span {
            start: Position(0, Arc::clone(&file)),
            end: Position(0, Arc::clone(&file)),
        },
    };

    let ast = parse(vec![eof.clone(), eof], file).unwrap();
    assert!(program(&ast).body.is_empty());
}

#[test]
fn test_unexpected_eof_in_arguments() {
    let error = parse_source("println(").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedEOF");
    assert_eq!(error.get_stage(), ErrorStage::Parse);
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_unexpected_eof_before_close_paren() {
    let error = parse_source("println('hello'").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedEOF {
            expected: "`,` or `)`".to_string()
        }
    );
}

#[test]
fn test_unexpected_eof_after_callee() {
    let error = parse_source("println").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedEOF {
            expected: "`(`".to_string()
        }
    );
}

#[test]
fn test_missing_comma_between_arguments() {
    let error = parse_source("log('a' 'b')").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "`,` or `)`".to_string(),
            received: "\"b\"".to_string()
        }
    );
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_trailing_comma_is_rejected() {
    let error = parse_source("log('a',)").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "string literal".to_string(),
            received: ")".to_string()
        }
    );
}

#[test]
fn test_identifier_argument_is_rejected() {
    let error = parse_source("log(value)").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_trailing_tokens_are_rejected() {
    let error = parse_source("println('hello'))").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "statement".to_string(),
            received: ")".to_string()
        }
    );
    assert_eq!(error.get_position().0, 16);
}

#[test]
fn test_statement_cannot_start_with_string() {
    let error = parse_source("'hello'").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 0);
}
