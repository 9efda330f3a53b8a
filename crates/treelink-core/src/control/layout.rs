//! Bit offsets of the control frame (source of truth).
//!
//! Same bit-order convention as the lighting frame: bit 0 is the first bit
//! transmitted, LSB-first within each byte. The frame is 21 bits of content
//! padded with zero bits to 3 bytes.

/// Padded frame size in bytes.
pub const FRAME_LEN: usize = 3;

/// 2-bit mode field; values 2–3 are reserved.
pub const MODE_OFFSET: usize = 0;
pub const MODE_WIDTH: usize = 2;

/// 3-bit unit id.
pub const UNIT_OFFSET: usize = 2;
pub const UNIT_WIDTH: usize = 3;

/// 16-bit verification word.
pub const CHECK_OFFSET: usize = 5;
pub const CHECK_WIDTH: usize = 16;

/// Expected verification word.
pub const CHECK_VALUE: u16 = 0x0e76;
