//! Lexical analysis.
//!
//! Converts program text into a flat stream of classified tokens. It handles:
//!
//! - Line/column tracking through a one-character cursor
//! - Two-character operators via one character of lookahead
//! - String literals and block comments
//! - Identifier, keyword and numeric literal classification

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod tokens;
