//! Compiler driver.
//!
//! Runs lexing, parsing and generation in sequence. Each call owns all of
//! its data, so the driver is reentrant and may be called from several
//! threads at once.

use std::{sync::Arc, time::Instant};

use log::debug;

use crate::{
    errors::errors::Error, generator::generator::generate, lexer::lexer::tokenize,
    parser::parser::parse, DEFAULT_FILE,
};

/// Compiles `source` to its canonical form.
///
/// The first error of any stage is returned unchanged and no partial
/// output is produced.
pub fn compile(source: &str) -> Result<String, Error> {
    compile_with_file(source, None)
}

/// Same as [`compile`], with `file` recorded in every position for
/// diagnostics.
pub fn compile_with_file(source: &str, file: Option<String>) -> Result<String, Error> {
    let file = file.unwrap_or_else(|| String::from(DEFAULT_FILE));
    let start = Instant::now();

    let tokens = tokenize(source.to_string(), Some(file.clone()))?;
    debug!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = parse(tokens, Arc::new(file))?;
    debug!("Parsed in {:?}", parse_start.elapsed());

    let generate_start = Instant::now();
    let output = generate(&ast);
    debug!("Generated in {:?}", generate_start.elapsed());
    debug!("Total time: {:?}", start.elapsed());

    Ok(output)
}
