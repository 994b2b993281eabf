//! Code generation module for the compiler.
//!
//! This module walks the AST and emits canonical source text:
//!
//! - Calls as `callee(arg, arg)`
//! - String literals double-quoted, with backslash escapes
//! - One statement per line

pub mod expr;
pub mod generator;
pub mod stmt;
