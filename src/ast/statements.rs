use crate::Span;

use super::ast::Node;

/// Program
/// The root of the AST: the statements of a source unit, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Node>,
    pub span: Span,
}
