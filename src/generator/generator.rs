//! Main generator module.
//!
//! This module contains the Generator structure, which accumulates the
//! emitted text while the AST is walked, and the `generate` entry point.

use log::debug;

use crate::ast::ast::Node;

use super::stmt::gen_node;

/// Output buffer for a single generation run.
pub struct Generator {
    /// The text emitted so far
    output: String,
}

impl Generator {
    pub fn new() -> Self {
        Generator {
            output: String::new(),
        }
    }

    /// Appends text to the output.
    pub fn emit(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn emit_char(&mut self, character: char) {
        self.output.push(character);
    }

    /// Consumes the generator and returns the emitted text.
    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Emits the canonical source text for `node`.
///
/// Pure and deterministic: the same tree always produces the same text.
pub fn generate(node: &Node) -> String {
    let mut generator = Generator::new();
    gen_node(&mut generator, node);

    let output = generator.finish();
    debug!("Generated {} bytes", output.len());
    output
}
