//! # Assembler
//!
//! Second pass: lowers parsed items to TxVM bytecode.
//!
//! | Item | Encoding |
//! |------|----------|
//! | `0..=31` | single small-int byte |
//! | other integer | push-data(zig-zag varint) `int` |
//! | bytes | `varint(len + MIN_PUSHDATA)` bytes |
//! | `[ ... ]` | push-data(assembled inner program) |
//! | `{ e1 .. en }` | e1 .. en, `n`, `tuple` |

use crate::errors::AsmError;
use crate::lexer::tokenize;
use crate::opcodes::{Opcode, MAX_SMALL_INT, MIN_PUSHDATA};
use crate::parser::{parse, Item};
use crate::varint::{put_uvarint, put_varint};

/// Assemble source text into bytecode.
///
/// Either the whole program assembles or an error is returned; no partial
/// bytecode is ever produced.
pub fn assemble(src: &str) -> Result<Vec<u8>, AsmError> {
    let tokens = tokenize(src)?;
    let items = parse(&tokens)?;
    Ok(lower(&items))
}

/// Lower an item tree to bytecode.
pub fn lower(items: &[Item]) -> Vec<u8> {
    let mut out = Vec::new();
    for item in items {
        lower_item(&mut out, item);
    }
    out
}

fn lower_item(out: &mut Vec<u8>, item: &Item) {
    match item {
        Item::Op(op) => out.push(op.byte()),
        Item::Int(n) => push_int(out, *n),
        Item::Data(bytes) => push_data(out, bytes),
        Item::Program(inner) => push_data(out, &lower(inner)),
        Item::Tuple(elems) => {
            for elem in elems {
                lower_item(out, elem);
            }
            push_int(out, elems.len() as i64);
            out.push(Opcode::Tuple.byte());
        }
    }
}

/// Append the encoding of an integer push.
pub fn push_int(out: &mut Vec<u8>, n: i64) {
    if (0..=i64::from(MAX_SMALL_INT)).contains(&n) {
        out.push(n as u8);
        return;
    }
    let mut encoded = Vec::new();
    put_varint(&mut encoded, n);
    push_data(out, &encoded);
    out.push(Opcode::Int.byte());
}

/// Append the encoding of a byte-string push.
pub fn push_data(out: &mut Vec<u8>, data: &[u8]) {
    put_uvarint(out, data.len() as u64 + u64::from(MIN_PUSHDATA));
    out.extend_from_slice(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_ints_are_single_bytes() {
        assert_eq!(assemble("0 31").unwrap(), vec![0x00, 0x1F]);
    }

    #[test]
    fn test_large_int() {
        // zig-zag(32) = 64
        assert_eq!(assemble("32").unwrap(), vec![MIN_PUSHDATA + 1, 64, 0x20]);
    }

    #[test]
    fn test_negative_int() {
        assert_eq!(assemble("-1").unwrap(), vec![MIN_PUSHDATA + 1, 0x01, 0x20]);
    }

    #[test]
    fn test_empty_and_short_data() {
        assert_eq!(assemble("x''").unwrap(), vec![MIN_PUSHDATA]);
        assert_eq!(
            assemble("'AB'").unwrap(),
            vec![MIN_PUSHDATA + 2, b'A', b'B']
        );
    }

    #[test]
    fn test_long_data_uses_multibyte_prefix() {
        let src = format!("x'{}'", "ab".repeat(40));
        let code = assemble(&src).unwrap();
        // 40 + 95 = 135 -> [0x87, 0x01]
        assert_eq!(&code[..2], &[0x87, 0x01]);
        assert_eq!(code.len(), 42);
    }

    #[test]
    fn test_program_literal() {
        let code = assemble("[verify] contract").unwrap();
        assert_eq!(
            code,
            vec![
                MIN_PUSHDATA + 1,
                Opcode::Verify.byte(),
                Opcode::Contract.byte(),
            ]
        );
    }

    #[test]
    fn test_tuple_literal() {
        let code = assemble("{'A', 2}").unwrap();
        assert_eq!(
            code,
            vec![MIN_PUSHDATA + 1, b'A', 0x02, 0x02, Opcode::Tuple.byte()]
        );
    }

    #[test]
    fn test_broken_instruction_yields_no_bytes() {
        let result = assemble("get get get\n[txid x'00' get 0 chksig verify] contract put");
        assert!(matches!(result, Err(AsmError::UnknownMnemonic { .. })));
    }

    #[test]
    fn test_comments_and_case() {
        assert_eq!(
            assemble("GET # contract stack\nPut").unwrap(),
            assemble("get put").unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_assembly_is_deterministic(key in proptest::array::uniform32(any::<u8>())) {
            let src = format!("[txid x'{}' get 0 checksig verify] contract put", hex::encode(key));
            prop_assert_eq!(assemble(&src).unwrap(), assemble(&src).unwrap());
        }

        #[test]
        fn prop_int_lowering_is_canonical(n in any::<i64>()) {
            let mut out = Vec::new();
            push_int(&mut out, n);
            prop_assert_eq!(assemble(&n.to_string()).unwrap(), out);
        }
    }
}
