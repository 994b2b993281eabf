//! Error types and error handling for the compiler.
//!
//! This module defines the error types shared by every stage of the
//! pipeline. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and parsing
//! - Helpful error tips used when rendering diagnostics

pub mod errors;
