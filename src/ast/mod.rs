/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type shared by every stage
/// - expressions: Definitions for call and string literal expressions
/// - statements: Definition of the program root
pub mod ast;
pub mod expressions;
pub mod statements;
