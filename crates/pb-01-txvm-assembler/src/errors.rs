//! # Assembler Errors

use std::fmt;
use thiserror::Error;

/// Source position (1-based line and column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub col: usize,
}

impl Span {
    /// Create a span.
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Assembly and disassembly errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmError {
    /// Character that cannot start any token.
    #[error("{at}: unexpected character `{ch}`")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Position
        at: Span,
    },

    /// Identifier that is not a TxVM mnemonic.
    #[error("{at}: unknown mnemonic `{word}`")]
    UnknownMnemonic {
        /// The identifier as written
        word: String,
        /// Position
        at: Span,
    },

    /// Token that is valid on its own but not here.
    #[error("{at}: unexpected `{found}`")]
    UnexpectedToken {
        /// Token text
        found: String,
        /// Position
        at: Span,
    },

    /// String or hex literal without a closing quote.
    #[error("{at}: unterminated literal")]
    UnterminatedLiteral {
        /// Position of the opening quote
        at: Span,
    },

    /// Malformed hex literal.
    #[error("{at}: invalid hex literal: {reason}")]
    InvalidHex {
        /// Decoder message
        reason: String,
        /// Position
        at: Span,
    },

    /// `[` or `{` never closed.
    #[error("{at}: unclosed `{open}`")]
    Unclosed {
        /// Opening delimiter
        open: char,
        /// Position of the opening delimiter
        at: Span,
    },

    /// Integer literal that does not fit in i64.
    #[error("{at}: integer literal `{literal}` out of range")]
    IntegerOverflow {
        /// Literal as written
        literal: String,
        /// Position
        at: Span,
    },

    /// Tuple element that is an instruction rather than a literal.
    #[error("{at}: tuple elements must be literals, found `{found}`")]
    NonLiteralTupleElement {
        /// Token text
        found: String,
        /// Position
        at: Span,
    },

    /// Bytecode ends inside a varint.
    #[error("truncated varint at offset {offset}")]
    TruncatedVarint {
        /// Byte offset
        offset: usize,
    },

    /// Varint prefix that decodes below the push-data range.
    #[error("invalid push-data prefix at offset {offset}")]
    InvalidPushdata {
        /// Byte offset
        offset: usize,
    },

    /// Bytecode ends inside push-data.
    #[error("push-data at offset {offset} needs {needed} bytes, {available} available")]
    TruncatedPushdata {
        /// Byte offset of the prefix
        offset: usize,
        /// Declared length
        needed: usize,
        /// Remaining bytes
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mnemonic_error() {
        let err = AsmError::UnknownMnemonic {
            word: "chksig".to_string(),
            at: Span::new(3, 7),
        };
        assert_eq!(err.to_string(), "3:7: unknown mnemonic `chksig`");
    }

    #[test]
    fn test_truncated_pushdata_error() {
        let err = AsmError::TruncatedPushdata {
            offset: 4,
            needed: 32,
            available: 3,
        };
        assert!(err.to_string().contains("32 bytes"));
    }
}
