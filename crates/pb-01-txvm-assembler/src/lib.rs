//! # PB-01 TxVM Assembler
//!
//! Two-pass assembler and matching disassembler for the TxVM instruction set.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Pure library (no ports, no I/O)
//!
//! ## Passes
//!
//! | Pass | Module | Output |
//! |------|--------|--------|
//! | 1a | `lexer` | tokens with line/column |
//! | 1b | `parser` | item tree (ops, literals, nested programs, tuples) |
//! | 2 | `assembler` | bytecode |
//!
//! ## Module Structure
//!
//! ```text
//! pb-01-txvm-assembler/
//! ├── opcodes.rs       # Instruction table, mnemonics
//! ├── varint.rs        # LEB128 / zig-zag varints
//! ├── lexer.rs         # Source -> tokens
//! ├── parser.rs        # Tokens -> items
//! ├── assembler.rs     # Items -> bytecode
//! └── disassembler.rs  # Bytecode -> text
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod disassembler;
pub mod errors;
pub mod lexer;
pub mod opcodes;
pub mod parser;
pub mod varint;

// Re-exports
pub use assembler::{assemble, lower, push_data, push_int};
pub use disassembler::{decode, disassemble, Instruction};
pub use errors::{AsmError, Span};
pub use opcodes::{Opcode, ALL_OPCODES, MAX_SMALL_INT, MIN_PUSHDATA, MIN_SMALL_INT};
pub use parser::Item;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
