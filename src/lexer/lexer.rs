use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SINGLE_CHAR, MK_TOKEN,
};

use super::{
    classify::{classify, is_run_char},
    cursor::Cursor,
    tokens::{Keywords, Token, TokenKind, RESERVED_LOOKUP},
};

/// A construct that was still open when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    String,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unterminated {
    pub construct: Construct,
    /// Where the opening `"` or `/*` was.
    pub position: Position,
}

impl Unterminated {
    pub fn into_error(self) -> Error {
        let error_impl = match self.construct {
            Construct::String => ErrorImpl::UnterminatedString,
            Construct::Comment => ErrorImpl::UnterminatedComment,
        };

        Error::new(error_impl, self.position)
    }
}

/// Pull-based tokenizer. Construct one per source text; it cannot be rewound.
#[derive(Debug, Clone)]
pub struct Lexer<'k> {
    cursor: Cursor,
    keywords: &'k Keywords,
    unterminated: Option<Unterminated>,
    done: bool,
}

impl Lexer<'static> {
    pub fn new(source: String) -> Self {
        Lexer::with_keywords(source, &RESERVED_LOOKUP)
    }
}

impl<'k> Lexer<'k> {
    pub fn with_keywords(source: String, keywords: &'k Keywords) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            keywords,
            unterminated: None,
            done: false,
        }
    }

    /// The string or comment that hit end of input, if any.
    ///
    /// `next_token` reports such a construct as a plain End-of-input token;
    /// this is how a caller tells it apart from a clean end.
    pub fn unterminated(&self) -> Option<Unterminated> {
        self.unterminated
    }

    /// Produces the next token.
    ///
    /// After the End-of-input token has been returned, every further call
    /// returns another End-of-input token at the same position. A fatal error
    /// leaves the cursor on the offending character.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let token = self.scan()?;
        trace!(
            kind = %token.kind,
            value = %token.value,
            line = token.position.line,
            column = token.position.column,
            "token"
        );
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, Error> {
        loop {
            while !self.cursor.is_at_end() && self.cursor.current().is_whitespace() {
                self.cursor.advance();
            }

            let start = self.cursor.position();

            if self.cursor.is_at_end() {
                return Ok(MK_TOKEN!(TokenKind::EndOfInput, "", start));
            }

            return match self.cursor.current() {
                '/' => match self.div_or_comment(start) {
                    Some(token) => Ok(token),
                    None => continue,
                },
                '<' => self.follow('=', TokenKind::LessEqual, Some(TokenKind::Less), start),
                '>' => self.follow('=', TokenKind::GreaterEqual, Some(TokenKind::Greater), start),
                '=' => self.follow('=', TokenKind::Equal, Some(TokenKind::Assign), start),
                '!' => self.follow('=', TokenKind::NotEqual, Some(TokenKind::Not), start),
                '&' => self.follow('&', TokenKind::And, None, start),
                '|' => self.follow('|', TokenKind::Or, None, start),
                '"' => Ok(self.string(start)),
                '{' => Ok(MK_SINGLE_CHAR!(self, TokenKind::Begin, "{", start)),
                '}' => Ok(MK_SINGLE_CHAR!(self, TokenKind::End, "}", start)),
                '(' => Ok(MK_SINGLE_CHAR!(self, TokenKind::LeftParentheses, "(", start)),
                ')' => Ok(MK_SINGLE_CHAR!(self, TokenKind::RightParentheses, ")", start)),
                '+' => Ok(MK_SINGLE_CHAR!(self, TokenKind::Plus, "+", start)),
                '-' => Ok(MK_SINGLE_CHAR!(self, TokenKind::Minus, "-", start)),
                '*' => Ok(MK_SINGLE_CHAR!(self, TokenKind::Multiply, "*", start)),
                '%' => Ok(MK_SINGLE_CHAR!(self, TokenKind::Mod, "%", start)),
                ';' => Ok(MK_SINGLE_CHAR!(self, TokenKind::Semicolon, ";", start)),
                ',' => Ok(MK_SINGLE_CHAR!(self, TokenKind::Comma, ",", start)),
                _ => self.identifier_or_number(start),
            };
        }
    }

    /// Two-character operators. `if_no` of `None` means the first character
    /// is not a token on its own.
    fn follow(
        &mut self,
        expect: char,
        if_yes: TokenKind,
        if_no: Option<TokenKind>,
        start: Position,
    ) -> Result<Token, Error> {
        let first = self.cursor.current();
        let next = self.cursor.advance();

        if !self.cursor.is_at_end() && next == expect {
            self.cursor.advance();
            return Ok(MK_TOKEN!(if_yes, format!("{}{}", first, expect), start));
        }

        match if_no {
            Some(kind) => Ok(MK_TOKEN!(kind, first.to_string(), start)),
            None => Err(Error::new(
                ErrorImpl::ExpectedFollow {
                    operator: first,
                    expected: expect,
                    found: if self.cursor.is_at_end() { None } else { Some(next) },
                },
                start,
            )),
        }
    }

    /// Text between double quotes, taken verbatim.
    fn string(&mut self, start: Position) -> Token {
        let mut value = String::new();

        loop {
            let c = self.cursor.advance();

            if self.cursor.is_at_end() {
                return self.end_unterminated(Construct::String, start);
            }

            if c == '"' {
                self.cursor.advance();
                return MK_TOKEN!(TokenKind::String, value, start);
            }

            value.push(c);
        }
    }

    /// Returns `None` when a block comment was skipped.
    fn div_or_comment(&mut self, start: Position) -> Option<Token> {
        if self.cursor.advance() != '*' || self.cursor.is_at_end() {
            return Some(MK_TOKEN!(TokenKind::Divide, "/", start));
        }

        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Some(self.end_unterminated(Construct::Comment, start));
            }

            if self.cursor.current() == '*' {
                if self.cursor.advance() == '/' && !self.cursor.is_at_end() {
                    self.cursor.advance();
                    debug!(line = start.line, column = start.column, "skipped block comment");
                    return None;
                }
            } else {
                self.cursor.advance();
            }
        }
    }

    fn identifier_or_number(&mut self, start: Position) -> Result<Token, Error> {
        let mut text = String::new();
        let mut purely_numeric = true;

        while !self.cursor.is_at_end() && is_run_char(self.cursor.current()) {
            let c = self.cursor.current();
            text.push(c);
            if !c.is_ascii_digit() {
                purely_numeric = false;
            }
            self.cursor.advance();
        }

        if text.is_empty() {
            return Err(Error::new(
                ErrorImpl::UnexpectedCharacter { character: self.cursor.current() },
                start,
            ));
        }

        let kind = classify(&text, purely_numeric, self.keywords);

        if kind == TokenKind::Error {
            warn!(
                value = %text,
                line = start.line,
                column = start.column,
                "malformed token"
            );
        }

        Ok(MK_TOKEN!(kind, text, start))
    }

    fn end_unterminated(&mut self, construct: Construct, start: Position) -> Token {
        self.unterminated = Some(Unterminated { construct, position: start });
        MK_TOKEN!(TokenKind::EndOfInput, "", self.cursor.position())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to and including the first End-of-input token, or
    /// up to the first fatal error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.next_token();
        self.done = match &item {
            Ok(token) => token.is_end_of_input(),
            Err(_) => true,
        };

        Some(item)
    }
}

/// Drains `source` into a token vector ending in exactly one End-of-input
/// token.
///
/// Unlike `next_token`, a string or block comment left open at end of input
/// is reported as an error here.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.by_ref().collect::<Result<Vec<Token>, Error>>()?;

    if let Some(unterminated) = lexer.unterminated() {
        return Err(unterminated.into_error());
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
