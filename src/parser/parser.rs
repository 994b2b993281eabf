//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry
//! point. Productions are plain recursive-descent functions with one token
//! of lookahead; the ones that start a statement or an argument are
//! dispatched through lookup tables keyed by the current token kind.

use std::{collections::HashMap, sync::Arc};

use log::debug;

use crate::{
    ast::{ast::Node, statements::Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The token stream always ends in an EOF token and the position never
/// moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for argument (null denotation) handlers
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Name of the source file, used when an EOF token has to be
    ///   supplied for a stream that lacks one
    pub fn new(mut tokens: Vec<Token>, file: Arc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or(Position(0, file));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Advancing at EOF stays at EOF.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.tokens[current].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind, describing the expectation
    /// with `expected` if it fails.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default description.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, &expected_kind.to_string())
    }

    /// Builds the error for finding the current token where `expected` was
    /// required.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();

        let error = match token.kind {
            TokenKind::EOF => ErrorImpl::UnexpectedEOF {
                expected: expected.to_string(),
            },
            TokenKind::String => ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                received: format!("{:?}", token.value),
            },
            _ => ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                received: token.value.clone(),
            },
        };

        Error::new(error, token.span.start.clone())
    }

    /// Returns true while the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers an argument handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the first non-EOF token after the current position, if a
    /// stream carries tokens past an EOF.
    pub fn trailing_token(&self) -> Option<&Token> {
        self.tokens[self.pos..]
            .iter()
            .find(|token| token.kind != TokenKind::EOF)
    }

    /// Returns the start of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into a `Node::Program`.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF. The
/// first error ends parsing; no partial tree is returned.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, normally the output of `tokenize`
/// * `file` - Name of the source file
pub fn parse(tokens: Vec<Token>, file: Arc<String>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens, Arc::clone(&file));
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    if let Some(token) = parser.trailing_token() {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::EOF.to_string(),
                received: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    debug!("Parsed {} statements", body.len());

    Ok(Node::Program(Program {
        body,
        span: Span {
            start: Position(0, file),
            end: parser.get_position(),
        },
    }))
}
