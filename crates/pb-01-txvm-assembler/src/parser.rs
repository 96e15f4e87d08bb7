//! # Parser
//!
//! First assembler pass: token stream to an item tree.

use crate::errors::{AsmError, Span};
use crate::lexer::{Token, TokenKind};
use crate::opcodes::Opcode;

/// Parsed program element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    /// Named instruction.
    Op(Opcode),
    /// Integer push.
    Int(i64),
    /// Byte-string push (hex or string literal).
    Data(Vec<u8>),
    /// `[ ... ]` program literal, pushed as its own bytecode.
    Program(Vec<Item>),
    /// `{ ... }` tuple literal.
    Tuple(Vec<Item>),
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Parse items until `]` (when `open` is set) or end of input.
    fn sequence(&mut self, open: Option<Span>) -> Result<Vec<Item>, AsmError> {
        let mut items = Vec::new();
        loop {
            let Some(token) = self.next() else {
                return match open {
                    Some(at) => Err(AsmError::Unclosed { open: '[', at }),
                    None => Ok(items),
                };
            };
            match &token.kind {
                TokenKind::RBracket if open.is_some() => return Ok(items),
                TokenKind::Word(word) => {
                    let op = Opcode::from_mnemonic(word).ok_or_else(|| {
                        AsmError::UnknownMnemonic {
                            word: word.clone(),
                            at: token.at,
                        }
                    })?;
                    items.push(Item::Op(op));
                }
                TokenKind::RBracket | TokenKind::RBrace | TokenKind::Comma => {
                    return Err(unexpected(token));
                }
                TokenKind::Int(_)
                | TokenKind::Hex(_)
                | TokenKind::Str(_)
                | TokenKind::LBracket
                | TokenKind::LBrace => items.push(self.literal(token)?),
            }
        }
    }

    /// Literal starting at `token` (already consumed).
    fn literal(&mut self, token: &'a Token) -> Result<Item, AsmError> {
        match &token.kind {
            TokenKind::Int(n) => Ok(Item::Int(*n)),
            TokenKind::Hex(bytes) | TokenKind::Str(bytes) => Ok(Item::Data(bytes.clone())),
            TokenKind::LBracket => Ok(Item::Program(self.sequence(Some(token.at))?)),
            TokenKind::LBrace => Ok(Item::Tuple(self.tuple(token.at)?)),
            TokenKind::Word(word) => Err(AsmError::NonLiteralTupleElement {
                found: word.clone(),
                at: token.at,
            }),
            TokenKind::RBracket | TokenKind::RBrace | TokenKind::Comma => Err(unexpected(token)),
        }
    }

    fn tuple(&mut self, open: Span) -> Result<Vec<Item>, AsmError> {
        let unclosed = AsmError::Unclosed { open: '{', at: open };
        let mut elems = Vec::new();

        if let Some(token) = self.peek() {
            if token.kind == TokenKind::RBrace {
                self.pos += 1;
                return Ok(elems);
            }
        }

        loop {
            let token = self.next().ok_or_else(|| unclosed.clone())?;
            elems.push(self.literal(token)?);

            let sep = self.next().ok_or_else(|| unclosed.clone())?;
            match sep.kind {
                TokenKind::Comma => continue,
                TokenKind::RBrace => return Ok(elems),
                _ => return Err(unexpected(sep)),
            }
        }
    }
}

fn unexpected(token: &Token) -> AsmError {
    AsmError::UnexpectedToken {
        found: token.kind.describe(),
        at: token.at,
    }
}

/// Parse a token stream into items.
pub fn parse(tokens: &[Token]) -> Result<Vec<Item>, AsmError> {
    Parser { tokens, pos: 0 }.sequence(None)
}
