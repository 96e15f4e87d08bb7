//! # TxVM Opcodes
//!
//! Opcode definitions and metadata for the TxVM instruction set.
//!
//! | Byte range | Meaning |
//! |------------|---------|
//! | `0x00-0x1F` | Push small integer `0..=31` |
//! | `0x20-0x5E` | Named instruction ([`Opcode`]) |
//! | `0x5F..`    | Push-data, length prefix `varint(len + 0x5F)` |

/// Smallest integer with a dedicated single-byte push.
pub const MIN_SMALL_INT: u8 = 0x00;

/// Largest integer with a dedicated single-byte push.
pub const MAX_SMALL_INT: u8 = 0x1F;

/// First byte value that introduces push-data.
pub const MIN_PUSHDATA: u8 = 0x5F;

/// TxVM named instruction.
///
/// Small-integer pushes and push-data are not listed here; they are encoded
/// directly by the assembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    // 0x20 - Integers
    Int = 0x20,
    Add = 0x21,
    Neg = 0x22,
    Mul = 0x23,
    Div = 0x24,
    Mod = 0x25,
    Gt = 0x26,

    // 0x27 - Boolean
    Not = 0x27,
    And = 0x28,
    Or = 0x29,

    // 0x2A - Stack
    Roll = 0x2A,
    Bury = 0x2B,
    Reverse = 0x2C,
    Get = 0x2D,
    Put = 0x2E,
    Depth = 0x2F,

    // 0x30 - Values
    Nonce = 0x30,
    Merge = 0x31,
    Split = 0x32,
    Issue = 0x33,
    Retire = 0x34,
    Amount = 0x35,
    AssetId = 0x36,
    Anchor = 0x37,

    // 0x38 - Crypto
    VmHash = 0x38,
    Sha256 = 0x39,
    Sha3 = 0x3A,
    CheckSig = 0x3B,

    // 0x3C - Tx log
    Log = 0x3C,
    PeekLog = 0x3D,
    TxId = 0x3E,
    Finalize = 0x3F,

    // 0x40 - Control flow
    Verify = 0x40,
    JumpIf = 0x41,

    // 0x42 - Contracts
    Exec = 0x42,
    Call = 0x43,
    Yield = 0x44,
    Wrap = 0x45,
    Input = 0x46,
    Output = 0x47,
    Contract = 0x48,
    Seed = 0x49,
    SelfContract = 0x4A,
    Caller = 0x4B,
    ContractProgram = 0x4C,
    TimeRange = 0x4D,

    // 0x4E - Extensions
    Prv = 0x4E,
    Ext = 0x4F,

    // 0x50 - Data
    Eq = 0x50,
    Dup = 0x51,
    Drop = 0x52,
    Peek = 0x53,
    Tuple = 0x54,
    Untuple = 0x55,
    Len = 0x56,
    Field = 0x57,
    Encode = 0x58,
    Cat = 0x59,
    Slice = 0x5A,
    BitNot = 0x5B,
    BitAnd = 0x5C,
    BitOr = 0x5D,
    BitXor = 0x5E,
}

/// Every named opcode, ordered by byte value starting at [`Opcode::Int`].
pub const ALL_OPCODES: [Opcode; 63] = [
    Opcode::Int,
    Opcode::Add,
    Opcode::Neg,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Mod,
    Opcode::Gt,
    Opcode::Not,
    Opcode::And,
    Opcode::Or,
    Opcode::Roll,
    Opcode::Bury,
    Opcode::Reverse,
    Opcode::Get,
    Opcode::Put,
    Opcode::Depth,
    Opcode::Nonce,
    Opcode::Merge,
    Opcode::Split,
    Opcode::Issue,
    Opcode::Retire,
    Opcode::Amount,
    Opcode::AssetId,
    Opcode::Anchor,
    Opcode::VmHash,
    Opcode::Sha256,
    Opcode::Sha3,
    Opcode::CheckSig,
    Opcode::Log,
    Opcode::PeekLog,
    Opcode::TxId,
    Opcode::Finalize,
    Opcode::Verify,
    Opcode::JumpIf,
    Opcode::Exec,
    Opcode::Call,
    Opcode::Yield,
    Opcode::Wrap,
    Opcode::Input,
    Opcode::Output,
    Opcode::Contract,
    Opcode::Seed,
    Opcode::SelfContract,
    Opcode::Caller,
    Opcode::ContractProgram,
    Opcode::TimeRange,
    Opcode::Prv,
    Opcode::Ext,
    Opcode::Eq,
    Opcode::Dup,
    Opcode::Drop,
    Opcode::Peek,
    Opcode::Tuple,
    Opcode::Untuple,
    Opcode::Len,
    Opcode::Field,
    Opcode::Encode,
    Opcode::Cat,
    Opcode::Slice,
    Opcode::BitNot,
    Opcode::BitAnd,
    Opcode::BitOr,
    Opcode::BitXor,
];

impl Opcode {
    /// Try to decode a named opcode from a byte.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        let first = Self::Int as u8;
        if byte < first || byte >= MIN_PUSHDATA {
            return None;
        }
        ALL_OPCODES.get(usize::from(byte - first)).copied()
    }

    /// Look up an opcode by mnemonic (case-insensitive).
    #[must_use]
    pub fn from_mnemonic(word: &str) -> Option<Self> {
        ALL_OPCODES
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(word))
    }

    /// Encoded byte.
    #[must_use]
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Canonical lowercase mnemonic.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Add => "add",
            Self::Neg => "neg",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Gt => "gt",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Roll => "roll",
            Self::Bury => "bury",
            Self::Reverse => "reverse",
            Self::Get => "get",
            Self::Put => "put",
            Self::Depth => "depth",
            Self::Nonce => "nonce",
            Self::Merge => "merge",
            Self::Split => "split",
            Self::Issue => "issue",
            Self::Retire => "retire",
            Self::Amount => "amount",
            Self::AssetId => "assetid",
            Self::Anchor => "anchor",
            Self::VmHash => "vmhash",
            Self::Sha256 => "sha256",
            Self::Sha3 => "sha3",
            Self::CheckSig => "checksig",
            Self::Log => "log",
            Self::PeekLog => "peeklog",
            Self::TxId => "txid",
            Self::Finalize => "finalize",
            Self::Verify => "verify",
            Self::JumpIf => "jumpif",
            Self::Exec => "exec",
            Self::Call => "call",
            Self::Yield => "yield",
            Self::Wrap => "wrap",
            Self::Input => "input",
            Self::Output => "output",
            Self::Contract => "contract",
            Self::Seed => "seed",
            Self::SelfContract => "self",
            Self::Caller => "caller",
            Self::ContractProgram => "contractprogram",
            Self::TimeRange => "timerange",
            Self::Prv => "prv",
            Self::Ext => "ext",
            Self::Eq => "eq",
            Self::Dup => "dup",
            Self::Drop => "drop",
            Self::Peek => "peek",
            Self::Tuple => "tuple",
            Self::Untuple => "untuple",
            Self::Len => "len",
            Self::Field => "field",
            Self::Encode => "encode",
            Self::Cat => "cat",
            Self::Slice => "slice",
            Self::BitNot => "bitnot",
            Self::BitAnd => "bitand",
            Self::BitOr => "bitor",
            Self::BitXor => "bitxor",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_discriminants() {
        for (i, op) in ALL_OPCODES.iter().enumerate() {
            assert_eq!(usize::from(op.byte()), 0x20 + i, "{:?} out of order", op);
        }
        assert_eq!(ALL_OPCODES.last().map(|op| op.byte() + 1), Some(MIN_PUSHDATA));
    }

    #[test]
    fn test_opcode_from_byte() {
        assert_eq!(Opcode::from_byte(0x20), Some(Opcode::Int));
        assert_eq!(Opcode::from_byte(0x3B), Some(Opcode::CheckSig));
        assert_eq!(Opcode::from_byte(0x5E), Some(Opcode::BitXor));
        assert_eq!(Opcode::from_byte(0x1F), None); // small int
        assert_eq!(Opcode::from_byte(MIN_PUSHDATA), None);
    }

    #[test]
    fn test_mnemonic_lookup_is_case_insensitive() {
        assert_eq!(Opcode::from_mnemonic("checksig"), Some(Opcode::CheckSig));
        assert_eq!(Opcode::from_mnemonic("CHECKSIG"), Some(Opcode::CheckSig));
        assert_eq!(Opcode::from_mnemonic("self"), Some(Opcode::SelfContract));
        assert_eq!(Opcode::from_mnemonic("checksign"), None);
    }

    #[test]
    fn test_mnemonics_round_trip() {
        for op in ALL_OPCODES {
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        }
    }
}
