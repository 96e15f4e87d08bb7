//! # Varints
//!
//! LEB128 unsigned varints (push-data length prefixes) and zig-zag signed
//! varints (integer literals outside the small-int range).

/// Append `value` as an unsigned LEB128 varint.
pub fn put_uvarint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Decode an unsigned varint from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` if the
/// input is truncated or overflows 64 bits.
pub fn read_uvarint(bytes: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().enumerate() {
        if i >= 10 {
            return None;
        }
        let low = u64::from(byte & 0x7F);
        if i == 9 && low > 1 {
            return None;
        }
        value |= low << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

/// Append `value` as a zig-zag signed varint.
pub fn put_varint(out: &mut Vec<u8>, value: i64) {
    let zigzag = ((value << 1) ^ (value >> 63)) as u64;
    put_uvarint(out, zigzag);
}

/// Decode a zig-zag signed varint from the front of `bytes`.
pub fn read_varint(bytes: &[u8]) -> Option<(i64, usize)> {
    let (zigzag, used) = read_uvarint(bytes)?;
    let value = ((zigzag >> 1) as i64) ^ -((zigzag & 1) as i64);
    Some((value, used))
}
