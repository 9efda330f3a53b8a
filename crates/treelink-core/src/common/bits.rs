//! LSB-first bit access over byte buffers.
//!
//! Absolute bit `b` lives in byte `b / 8` at in-byte position `b % 8`;
//! multi-bit fields store their least significant bit at the lowest absolute
//! offset. Both wire formats share these helpers so the bit-order convention
//! is fixed in exactly one place.

/// Read `width` bits (at most 16) starting at absolute bit `offset`.
/// The caller guarantees the buffer covers the field.
pub(crate) fn read_bits(buf: &[u8], offset: usize, width: usize) -> u16 {
    debug_assert!(width <= 16);
    let mut value = 0u16;
    for bit in 0..width {
        let pos = offset + bit;
        if buf[pos / 8] & (1 << (pos % 8)) != 0 {
            value |= 1 << bit;
        }
    }
    value
}

/// Write the low `width` bits (at most 16) of `value` starting at absolute
/// bit `offset`. Bits above `width` are ignored.
pub(crate) fn write_bits(buf: &mut [u8], offset: usize, width: usize, value: u16) {
    debug_assert!(width <= 16);
    for bit in 0..width {
        let pos = offset + bit;
        let mask = 1u8 << (pos % 8);
        if value & (1 << bit) != 0 {
            buf[pos / 8] |= mask;
        } else {
            buf[pos / 8] &= !mask;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{read_bits, write_bits};

    #[test]
    fn round_trips_within_one_byte() {
        let mut buf = [0u8; 2];
        write_bits(&mut buf, 2, 3, 0b101);
        assert_eq!(read_bits(&buf, 2, 3), 0b101);
        assert_eq!(buf[0], 0b0001_0100);
    }

    #[test]
    fn round_trips_across_byte_boundary() {
        let mut buf = [0u8; 3];
        write_bits(&mut buf, 6, 5, 0b11011);
        assert_eq!(read_bits(&buf, 6, 5), 0b11011);
        assert_eq!(buf[0], 0b1100_0000);
        assert_eq!(buf[1], 0b0000_0110);
    }

    #[test]
    fn write_clears_previous_bits() {
        let mut buf = [0xffu8; 2];
        write_bits(&mut buf, 4, 8, 0x00);
        assert_eq!(read_bits(&buf, 4, 8), 0x00);
        assert_eq!(buf[0], 0x0f);
        assert_eq!(buf[1], 0xf0);
    }

    #[test]
    fn sixteen_bit_field() {
        let mut buf = [0u8; 3];
        write_bits(&mut buf, 5, 16, 0x0e76);
        assert_eq!(read_bits(&buf, 5, 16), 0x0e76);
    }

    #[test]
    fn excess_value_bits_are_ignored() {
        let mut buf = [0u8; 1];
        write_bits(&mut buf, 0, 3, 0xffff);
        assert_eq!(read_bits(&buf, 0, 3), 0b111);
        assert_eq!(buf[0], 0b0000_0111);
    }
}
