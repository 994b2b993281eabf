use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Returns the pipeline stage that produced the error.
    pub fn get_stage(&self) -> ErrorStage {
        match &self.internal_error {
            ErrorImpl::UnexpectedChar { .. } | ErrorImpl::UnterminatedString => ErrorStage::Lex,
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::UnexpectedEOF { .. } => {
                ErrorStage::Parse
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedChar { .. } => "UnexpectedChar",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEOF { .. } => "UnexpectedEOF",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedChar { character } => {
                ErrorTip::Suggestion(format!("Unexpected character `{}`", character.escape_default()))
            }
            ErrorImpl::UnterminatedString => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {}, received `{}`",
                expected, received
            )),
            ErrorImpl::UnexpectedEOF { expected } => {
                ErrorTip::Suggestion(format!("Expected {} before end of input", expected))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Lex,
    Parse,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    // Lexing
    #[error("unexpected character: {character:?}")]
    UnexpectedChar { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,

    // Parsing
    #[error("unexpected token: expected {expected}, received {received:?}")]
    UnexpectedToken { expected: String, received: String },
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEOF { expected: String },
}
