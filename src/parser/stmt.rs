use crate::{ast::ast::Node, errors::errors::Error};

use super::parser::Parser;

/// Parses one statement, dispatching on the current token.
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("statement")),
    }
}
