use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal lexical error. Scanning stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::ExpectedFollow { .. } => "ExpectedFollow",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::ExpectedFollow { operator, expected, found } => {
                ErrorTip::Suggestion(match found {
                    Some(found) => format!(
                        "expected `{}{}`, found `{}` followed by `{}`",
                        operator,
                        expected,
                        operator,
                        found.escape_debug()
                    ),
                    None => format!(
                        "expected `{}{}`, found `{}` at end of input",
                        operator, expected, operator
                    ),
                })
            }
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("string literal is missing its closing `\"`"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("block comment is missing its closing `*/`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
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
    #[error("error: ({}) '{character}'", code_point(.character))]
    UnexpectedCharacter { character: char },
    #[error("error: expected {expected:?} after {operator:?}, found {found:?}")]
    ExpectedFollow {
        operator: char,
        expected: char,
        found: Option<char>,
    },
    #[error("error: unterminated string literal")]
    UnterminatedString,
    #[error("error: unterminated block comment")]
    UnterminatedComment,
}

fn code_point(character: &char) -> u32 {
    u32::from(*character)
}
