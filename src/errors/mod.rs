//! Error types for lexical analysis.
//!
//! Only fatal conditions live here: an unclassifiable character, a lone
//! `&` or `|`, and strings or comments left open at end of input. Malformed
//! runs such as `3x` are not errors at this level; they travel through the
//! token stream as `TokenKind::Error` tokens.

pub mod errors;

#[cfg(test)]
mod tests;
