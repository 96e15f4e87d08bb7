//! # Lexer
//!
//! Splits assembly source into tokens.
//!
//! ```text
//! get get get                      # comment to end of line
//! [txid x'ab..' get 0 checksig verify] contract put
//! {'A', -1, x''}
//! ```

use crate::errors::{AsmError, Span};
use std::iter::Peekable;
use std::str::Chars;

const COMMENT_CHAR: char = '#';
const QUOTE: char = '\'';
const HEX_PREFIX: char = 'x';

/// Token kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier (mnemonic).
    Word(String),
    /// Integer literal.
    Int(i64),
    /// `x'..'` literal.
    Hex(Vec<u8>),
    /// `'..'` literal.
    Str(Vec<u8>),
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Source-like rendering for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Word(word) => word.clone(),
            Self::Int(n) => n.to_string(),
            Self::Hex(bytes) => format!("x'{}'", hex::encode(bytes)),
            Self::Str(bytes) => format!("'{}'", String::from_utf8_lossy(bytes)),
            Self::LBracket => "[".to_string(),
            Self::RBracket => "]".to_string(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::Comma => ",".to_string(),
        }
    }
}

/// A token and where it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Kind.
    pub kind: TokenKind,
    /// Start position.
    pub at: Span,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            line: 1,
            col: 1,
        }
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.col)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_trivia(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == COMMENT_CHAR {
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else if ch.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Body of a quoted literal; the opening quote is already consumed.
    fn quoted(&mut self, start: Span) -> Result<String, AsmError> {
        let mut body = String::new();
        loop {
            match self.bump() {
                Some(QUOTE) => return Ok(body),
                Some(ch) => body.push(ch),
                None => return Err(AsmError::UnterminatedLiteral { at: start }),
            }
        }
    }

    fn word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                word.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        word
    }

    fn integer(&mut self, start: Span) -> Result<i64, AsmError> {
        let mut literal = String::new();
        if self.chars.peek() == Some(&'-') {
            literal.push('-');
            self.bump();
            match self.chars.peek() {
                Some(ch) if ch.is_ascii_digit() => {}
                _ => return Err(AsmError::UnexpectedChar { ch: '-', at: start }),
            }
        }
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                literal.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        literal
            .parse::<i64>()
            .map_err(|_| AsmError::IntegerOverflow { literal, at: start })
    }

    fn next_token(&mut self) -> Result<Option<Token>, AsmError> {
        self.skip_trivia();
        let at = self.span();
        let Some(&ch) = self.chars.peek() else {
            return Ok(None);
        };

        let kind = match ch {
            '[' | ']' | '{' | '}' | ',' => {
                self.bump();
                match ch {
                    '[' => TokenKind::LBracket,
                    ']' => TokenKind::RBracket,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    _ => TokenKind::Comma,
                }
            }
            QUOTE => {
                self.bump();
                TokenKind::Str(self.quoted(at)?.into_bytes())
            }
            '-' | '0'..='9' => TokenKind::Int(self.integer(at)?),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let word = self.word();
                if word == HEX_PREFIX.to_string() && self.chars.peek() == Some(&QUOTE) {
                    self.bump();
                    let digits = self.quoted(at)?;
                    let bytes = hex::decode(digits.trim()).map_err(|e| AsmError::InvalidHex {
                        reason: e.to_string(),
                        at,
                    })?;
                    TokenKind::Hex(bytes)
                } else {
                    TokenKind::Word(word)
                }
            }
            other => return Err(AsmError::UnexpectedChar { ch: other, at }),
        };

        Ok(Some(Token { kind, at }))
    }
}

/// Tokenize assembly source.
pub fn tokenize(src: &str) -> Result<Vec<Token>, AsmError> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
