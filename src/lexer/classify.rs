//! Classification of identifier-shaped runs.
//!
//! A run is the maximal sequence of characters accepted by [`is_run_char`].
//! Once collected it is classified by an ordered chain of checks; the first
//! one that matches decides the kind. Digits are legal both in numbers and in
//! identifiers, so the numeric formats must be tried before anything else.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{Keywords, TokenKind};

/// Symbols that may appear inside a run besides letters and digits.
pub const EXTRA_RUN_SYMBOLS: &[char] = &['$', ':', '?', '@', '#', '\'', '.', '^', '+', '-', '_'];

lazy_static! {
    static ref BINARY: Regex = Regex::new(r"^0b[01]{1,32}$").unwrap();
    static ref HEXADECIMAL: Regex = Regex::new(r"^0x[0-9a-fA-F]{1,8}$").unwrap();
    static ref FLOAT_WITH_EXPONENT: Regex =
        Regex::new(r"^[-+]?[0-9]{0,6}\.[0-9]{1,15}[eE][-+][0-9]{1,6}$").unwrap();
    static ref FLOAT: Regex = Regex::new(r"^[-+]?[0-9]{0,15}\.[0-9]{1,15}$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_]{0,30}$").unwrap();
}

pub fn is_run_char(c: char) -> bool {
    c.is_alphanumeric() || EXTRA_RUN_SYMBOLS.contains(&c)
}

/// Decides the kind of a finished, non-empty run.
///
/// `purely_numeric` is true when every character of the run is an ASCII digit.
pub fn classify(run: &str, purely_numeric: bool, keywords: &Keywords) -> TokenKind {
    if BINARY.is_match(run) {
        return TokenKind::Binary;
    }

    if HEXADECIMAL.is_match(run) {
        return TokenKind::Hexadecimal;
    }

    if FLOAT_WITH_EXPONENT.is_match(run) || FLOAT.is_match(run) {
        return TokenKind::FloatPointNumber;
    }

    if run.starts_with(|c: char| c.is_ascii_digit()) {
        return if purely_numeric {
            TokenKind::Integer
        } else {
            TokenKind::Error
        };
    }

    if let Some(kind) = keywords.get(run) {
        return kind;
    }

    if IDENTIFIER.is_match(run) {
        TokenKind::Identifier
    } else {
        TokenKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RESERVED_LOOKUP;

    fn kind_of(run: &str) -> TokenKind {
        let purely_numeric = run.chars().all(|c| c.is_ascii_digit());
        classify(run, purely_numeric, &RESERVED_LOOKUP)
    }

    #[test]
    fn test_binary() {
        assert_eq!(kind_of("0b101"), TokenKind::Binary);
        assert_eq!(kind_of("0b0"), TokenKind::Binary);
        assert_eq!(kind_of(&format!("0b{}", "1".repeat(32))), TokenKind::Binary);
        assert_eq!(kind_of(&format!("0b{}", "1".repeat(33))), TokenKind::Error);
        assert_eq!(kind_of("0b"), TokenKind::Error);
        assert_eq!(kind_of("0b102"), TokenKind::Error);
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(kind_of("0x1F"), TokenKind::Hexadecimal);
        assert_eq!(kind_of("0xdeadBEEF"), TokenKind::Hexadecimal);
        assert_eq!(kind_of("0x123456789"), TokenKind::Error);
        assert_eq!(kind_of("0x"), TokenKind::Error);
        assert_eq!(kind_of("0xG1"), TokenKind::Error);
    }

    #[test]
    fn test_float_with_exponent() {
        assert_eq!(kind_of("1.5e+10"), TokenKind::FloatPointNumber);
        assert_eq!(kind_of("123456.0E-123456"), TokenKind::FloatPointNumber);
        assert_eq!(kind_of("-.5e-1"), TokenKind::FloatPointNumber);
        // exponent sign is mandatory
        assert_eq!(kind_of("1.5e10"), TokenKind::Error);
        // at most six integer digits before an exponent
        assert_eq!(kind_of("1234567.0e+1"), TokenKind::Error);
    }

    #[test]
    fn test_plain_float() {
        assert_eq!(kind_of("3.14"), TokenKind::FloatPointNumber);
        assert_eq!(kind_of(".5"), TokenKind::FloatPointNumber);
        assert_eq!(kind_of("+2.0"), TokenKind::FloatPointNumber);
        assert_eq!(kind_of("1234567.5"), TokenKind::FloatPointNumber);
        assert_eq!(kind_of("3."), TokenKind::Error);
        assert_eq!(kind_of("1.2.3"), TokenKind::Error);
        assert_eq!(kind_of(&format!("1.{}", "0".repeat(16))), TokenKind::Error);
    }

    #[test]
    fn test_integer_and_mixed_digits() {
        assert_eq!(kind_of("42"), TokenKind::Integer);
        assert_eq!(kind_of("0"), TokenKind::Integer);
        assert_eq!(kind_of("3x"), TokenKind::Error);
        assert_eq!(kind_of("0b"), TokenKind::Error);
        assert_eq!(kind_of("1_000"), TokenKind::Error);
    }

    #[test]
    fn test_keywords_before_identifiers() {
        assert_eq!(kind_of("while"), TokenKind::KeywordWhile);
        assert_eq!(kind_of("return"), TokenKind::KeywordReturn);
        assert_eq!(kind_of("While"), TokenKind::Identifier);
        assert_eq!(kind_of("whiles"), TokenKind::Identifier);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(kind_of("x"), TokenKind::Identifier);
        assert_eq!(kind_of("snake_case_2"), TokenKind::Identifier);
        assert_eq!(kind_of(&format!("a{}", "b".repeat(30))), TokenKind::Identifier);
        assert_eq!(kind_of(&format!("a{}", "b".repeat(31))), TokenKind::Error);
        assert_eq!(kind_of("_x"), TokenKind::Error);
        assert_eq!(kind_of("a$b"), TokenKind::Error);
        assert_eq!(kind_of("héllo"), TokenKind::Error);
    }

    #[test]
    fn test_run_chars() {
        for c in ['a', 'Z', '7', 'é', '$', ':', '?', '@', '#', '\'', '.', '^', '+', '-', '_'] {
            assert!(is_run_char(c), "{:?} should extend a run", c);
        }

        for c in [' ', '\n', '"', '&', '|', '(', ';', '/', '*', '~'] {
            assert!(!is_run_char(c), "{:?} should end a run", c);
        }
    }
}
