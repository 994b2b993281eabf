use crate::Span;

use super::{
    expressions::{CallExpr, StringExpr},
    statements::Program,
};

/// Node Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum NodeType {
    Program,
    CallExpression,
    StringLiteral,
}

/// A node of the syntax tree.
///
/// Every node owns its children. Consumers match on the variant rather
/// than inspecting a runtime tag, so adding a variant is a compile error
/// everywhere it is not handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    CallExpression(CallExpr),
    StringLiteral(StringExpr),
}

impl Node {
    /// Returns the type of the node.
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Program(_) => NodeType::Program,
            Node::CallExpression(_) => NodeType::CallExpression,
            Node::StringLiteral(_) => NodeType::StringLiteral,
        }
    }

    /// Returns the span of source text the node was parsed from.
    pub fn get_span(&self) -> &Span {
        match self {
            Node::Program(program) => &program.span,
            Node::CallExpression(call) => &call.span,
            Node::StringLiteral(string) => &string.span,
        }
    }
}
