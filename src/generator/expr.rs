use crate::ast::expressions::{CallExpr, StringExpr};

use super::{generator::Generator, stmt::gen_node};

/// Emits `callee(arg, arg)`.
pub fn gen_call_expr(generator: &mut Generator, call: &CallExpr) {
    generator.emit(&call.callee);
    generator.emit_char('(');

    for (index, argument) in call.arguments.iter().enumerate() {
        if index > 0 {
            generator.emit(", ");
        }
        gen_node(generator, argument);
    }

    generator.emit_char(')');
}

pub fn gen_string_expr(generator: &mut Generator, string: &StringExpr) {
    generator.emit_char('"');
    generator.emit(&escape_string(&string.value));
    generator.emit_char('"');
}

/// Escapes a string for a double-quoted literal. The lexer decodes the
/// result back to `value`.
pub fn escape_string(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\0' => result.push_str("\\0"),
            // C0 and C1 controls all fit in two hex digits
            ch if ch.is_control() => result.push_str(&format!("\\x{:02x}", ch as u32)),
            ch => result.push(ch),
        }
    }

    result
}
