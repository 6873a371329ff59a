//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE_CHAR!` - Consumes one character and creates its fixed-kind token

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - Anything convertible into the token's `String` text
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42", Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: ::std::string::String::from($value),
            position: $position,
        }
    };
}

/// Consumes the current character of a lexer and creates the token for a
/// single-character operator or punctuation mark.
///
/// # Example
///
/// ```ignore
/// '{' => MK_SINGLE_CHAR!(self, TokenKind::Begin, "{", start),
/// ```
#[macro_export]
macro_rules! MK_SINGLE_CHAR {
    ($lexer:expr, $kind:expr, $value:literal, $position:expr) => {{
        $lexer.cursor.advance();
        $crate::MK_TOKEN!($kind, $value, $position)
    }};
}
