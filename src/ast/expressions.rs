use crate::Span;

use super::ast::Node;

// LITERALS

/// String Expression
/// Represents a string literal in the AST. `value` holds the decoded
/// contents, without quotes or escapes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

// CALLS

/// Call Expression
/// Represents a call of a named function, e.g. `println('hello')`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Node>,
    pub span: Span,
}
