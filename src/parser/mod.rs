//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. The grammar is:
//!
//! ```text
//! program   := statement*
//! statement := callExpr
//! callExpr  := Identifier '(' (String (',' String)*)? ')'
//! ```
//!
//! Statement and argument productions are looked up by the kind of their
//! first token, so each decision needs one token of lookahead.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
