use crate::ast::{ast::Node, statements::Program};

use super::{
    expr::{gen_call_expr, gen_string_expr},
    generator::Generator,
};

pub fn gen_node(generator: &mut Generator, node: &Node) {
    match node {
        Node::Program(program) => gen_program(generator, program),
        Node::CallExpression(call) => gen_call_expr(generator, call),
        Node::StringLiteral(string) => gen_string_expr(generator, string),
    }
}

/// One statement per line, without a trailing newline.
pub fn gen_program(generator: &mut Generator, program: &Program) {
    for (index, statement) in program.body.iter().enumerate() {
        if index > 0 {
            generator.emit_char('\n');
        }
        gen_node(generator, statement);
    }
}
