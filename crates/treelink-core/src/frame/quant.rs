//! Lossy 8-bit-to-3-bit intensity quantization.

/// Quantize an 8-bit intensity to its 3-bit wire code (the top three bits).
///
/// # Examples
/// ```
/// use treelink_core::frame::quantize;
///
/// assert_eq!(quantize(0), 0);
/// assert_eq!(quantize(255), 7);
/// assert_eq!(quantize(0b1010_0000), 0b101);
/// ```
pub fn quantize(level: u8) -> u8 {
    level >> 5
}

/// Reconstruct an approximate 8-bit intensity from a 3-bit code.
///
/// The code is replicated across the byte (`(c<<5) | (c<<2) | (c>>1)`) so the
/// reconstruction error is spread instead of biased low, and code 7 maps back
/// to full brightness. Only the top three bits of the original level survive
/// the round trip.
pub fn dequantize(code: u8) -> u8 {
    let code = code & 0x07;
    (code << 5) | (code << 2) | (code >> 1)
}
