use crate::{
    ast::{
        ast::Node,
        expressions::{CallExpr, StringExpr},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::Parser;

/// Parses an expression in argument position.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("string literal")),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::String)?;

    Ok(Node::StringLiteral(StringExpr {
        value: token.value,
        span: token.span,
    }))
}

/// `callee ( ['string' {, 'string'}] )`
pub fn parse_call_expr(parser: &mut Parser) -> Result<Node, Error> {
    let callee = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser)?);
        }
    }

    let close = parser.expect_error(TokenKind::CloseParen, "`,` or `)`")?;

    Ok(Node::CallExpression(CallExpr {
        callee: callee.value,
        arguments,
        span: Span {
            start: callee.span.start,
            end: close.span.end,
        },
    }))
}
