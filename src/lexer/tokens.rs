use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// The reserved words of the language. Built once, shared read-only by
    /// every lexer that does not bring its own table.
    pub static ref RESERVED_LOOKUP: Keywords = Keywords::new();
}

/// Exact, case-sensitive mapping from reserved word to keyword kind.
#[derive(Debug, Clone)]
pub struct Keywords {
    map: HashMap<&'static str, TokenKind>,
}

impl Keywords {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::KeywordIf);
        map.insert("else", TokenKind::KeywordElse);
        map.insert("print", TokenKind::KeywordPrint);
        map.insert("read", TokenKind::KeywordRead);
        map.insert("integer", TokenKind::KeywordInteger);
        map.insert("string", TokenKind::KeywordString);
        map.insert("hex", TokenKind::KeywordHex);
        map.insert("binary", TokenKind::KeywordBinary);
        map.insert("while", TokenKind::KeywordWhile);
        map.insert("return", TokenKind::KeywordReturn);
        Keywords { map }
    }

    pub fn get(&self, word: &str) -> Option<TokenKind> {
        self.map.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,

    Multiply,
    Divide,
    Mod,
    Plus,
    Minus,

    Not,       // !
    Less,      // <
    LessEqual, // <=
    Greater,
    GreaterEqual,
    Equal,    // ==
    NotEqual, // !=
    Assign,   // =
    And,      // &&
    Or,       // ||

    // Reserved
    KeywordIf,
    KeywordElse,
    KeywordWhile,
    KeywordPrint,
    KeywordRead,
    KeywordInteger,
    KeywordString,
    KeywordHex,
    KeywordReturn,
    KeywordBinary,

    LeftParentheses,
    RightParentheses,
    Begin, // {
    End,   // }
    Semicolon,
    Comma,

    Identifier,
    Integer,
    String,
    Binary,
    Hexadecimal,
    FloatPointNumber,

    Error,
}

impl TokenKind {
    /// The name used when tokens are written out, one per line.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "End_of_input",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::Mod => "Mod",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Not => "Not",
            TokenKind::Less => "Less",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::Equal => "Equal",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::Assign => "Assign",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::KeywordIf => "Keyword_if",
            TokenKind::KeywordElse => "Keyword_else",
            TokenKind::KeywordWhile => "Keyword_while",
            TokenKind::KeywordPrint => "Keyword_print",
            TokenKind::KeywordRead => "Keyword_read",
            TokenKind::KeywordInteger => "Keyword_integer",
            TokenKind::KeywordString => "Keyword_string",
            TokenKind::KeywordHex => "Keyword_hex",
            TokenKind::KeywordReturn => "Keyword_return",
            TokenKind::KeywordBinary => "Keyword_binary",
            TokenKind::LeftParentheses => "LeftParentheses",
            TokenKind::RightParentheses => "RightParentheses",
            TokenKind::Begin => "Begin",
            TokenKind::End => "End",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::String => "String",
            TokenKind::Binary => "Binary",
            TokenKind::Hexadecimal => "Hexadecimal",
            TokenKind::FloatPointNumber => "FloatPointNumber",
            TokenKind::Error => "Error",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KeywordIf
                | TokenKind::KeywordElse
                | TokenKind::KeywordWhile
                | TokenKind::KeywordPrint
                | TokenKind::KeywordRead
                | TokenKind::KeywordInteger
                | TokenKind::KeywordString
                | TokenKind::KeywordHex
                | TokenKind::KeywordReturn
                | TokenKind::KeywordBinary
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.kind, self.value)
        }
    }
}

impl Token {
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// `line column kind text`, aligned for reading in a terminal or file.
    pub fn render_with_position(&self) -> String {
        let prefix = format!("{:>5} {:>5} ", self.position.line, self.position.column);

        if self.value.is_empty() {
            format!("{}{}", prefix, self.kind.name())
        } else {
            format!("{}{:<16} {}", prefix, self.kind.name(), self.value)
        }
    }
}
