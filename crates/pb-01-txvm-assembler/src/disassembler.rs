//! # Disassembler
//!
//! Renders bytecode as assembly text that reassembles to the same bytes.

use crate::errors::AsmError;
use crate::opcodes::{Opcode, MAX_SMALL_INT, MIN_PUSHDATA};
use crate::varint::{put_varint, read_uvarint, read_varint};

/// Decoded bytecode element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// Small-integer push.
    SmallInt(u8),
    /// Named instruction.
    Op(Opcode),
    /// Push-data.
    Data(&'a [u8]),
}

/// Decode bytecode into instructions.
pub fn decode(code: &[u8]) -> Result<Vec<Instruction<'_>>, AsmError> {
    let mut out = Vec::new();
    let mut pc = 0;
    while let Some(&byte) = code.get(pc) {
        if byte <= MAX_SMALL_INT {
            out.push(Instruction::SmallInt(byte));
            pc += 1;
        } else if let Some(op) = Opcode::from_byte(byte) {
            out.push(Instruction::Op(op));
            pc += 1;
        } else {
            let (prefix, used) =
                read_uvarint(&code[pc..]).ok_or(AsmError::TruncatedVarint { offset: pc })?;
            let len = prefix
                .checked_sub(u64::from(MIN_PUSHDATA))
                .ok_or(AsmError::InvalidPushdata { offset: pc })? as usize;
            let start = pc + used;
            let available = code.len() - start;
            if len > available {
                return Err(AsmError::TruncatedPushdata {
                    offset: pc,
                    needed: len,
                    available,
                });
            }
            out.push(Instruction::Data(&code[start..start + len]));
            pc = start + len;
        }
    }
    Ok(out)
}

/// Disassemble bytecode into canonical assembly text.
///
/// Push-data immediately followed by `int` is printed as an integer literal
/// when that is how the assembler would have encoded it.
pub fn disassemble(code: &[u8]) -> Result<String, AsmError> {
    let instructions = decode(code)?;
    let mut words: Vec<String> = Vec::with_capacity(instructions.len());
    let mut iter = instructions.iter().peekable();

    while let Some(instruction) = iter.next() {
        match instruction {
            Instruction::SmallInt(n) => words.push(n.to_string()),
            Instruction::Op(op) => words.push(op.mnemonic().to_string()),
            Instruction::Data(data) => {
                let followed_by_int = iter.peek() == Some(&&Instruction::Op(Opcode::Int));
                match canonical_int(data) {
                    Some(n) if followed_by_int => {
                        iter.next();
                        words.push(n.to_string());
                    }
                    _ => words.push(format!("x'{}'", hex::encode(data))),
                }
            }
        }
    }

    Ok(words.join(" "))
}

/// The integer `data` encodes, if `push_int` would have produced exactly it.
fn canonical_int(data: &[u8]) -> Option<i64> {
    let (n, used) = read_varint(data)?;
    if used != data.len() || (0..=i64::from(MAX_SMALL_INT)).contains(&n) {
        return None;
    }
    let mut reencoded = Vec::new();
    put_varint(&mut reencoded, n);
    (reencoded == data).then_some(n)
}
