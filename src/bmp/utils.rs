//! Little-endian field helpers and the shared row padding rule.

/// Interpret the first `count` bytes of `bytes` as an unsigned
/// little-endian integer.
///
/// Returns `None` when `bytes` is shorter than `count` or `count` does not
/// fit in a `u32` (more than 4 bytes).
pub fn read_little_endian(bytes: &[u8], count: usize) -> Option<u32> {
    if count > 4 {
        return None;
    }
    let field = bytes.get(..count)?;
    Some(
        field
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)),
    )
}

/// Emit `value` as `count` little-endian bytes, dropping higher-order bits.
///
/// Bytes beyond the 32 bits of `value` are written as zero.
pub fn write_little_endian(value: u32, count: usize) -> Vec<u8> {
    (0..count)
        .map(|i| {
            let shift = u32::try_from(i * 8).unwrap_or(u32::MAX);
            value.checked_shr(shift).unwrap_or(0) as u8
        })
        .collect()
}

/// Padding bytes appended to a row of `row_bytes` content bytes so the
/// stride lands on a multiple of 4.
pub const fn row_padding(row_bytes: u64) -> u64 {
    (4 - row_bytes % 4) % 4
}

/// Row stride in bytes, including padding.
pub const fn row_stride(row_bytes: u64) -> u64 {
    row_bytes + row_padding(row_bytes)
}
