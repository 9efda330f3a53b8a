//! Bit offsets of the 64-bit lighting frame (source of truth).
//!
//! Bit 0 is the first bit transmitted and maps to the least significant bit
//! of byte 0; within each byte bits fill LSB-first, and multi-bit fields
//! store their least significant bit at the lowest offset. The tree-address
//! mask is split: its low five bits live at [`LOW_MASK_OFFSET`] while bit 5
//! is relocated to [`TREE6_BIT`] so the level fields around it stay aligned
//! to 16-bit boundaries.

/// Packed frame size in bytes.
pub const FRAME_LEN: usize = 8;

/// Instrument flag: 0 = dimmer, 1 = memory recall.
pub const INSTRUMENT_BIT: usize = 0;

/// Width of one quantized level field.
pub const LEVEL_WIDTH: usize = 3;
/// Number of level fields.
pub const LEVEL_COUNT: usize = 16;

/// All-units flag; when set the address mask fields are stale.
pub const ALL_TREES_BIT: usize = 16;
/// Relocated bit 5 of the tree-address mask.
pub const TREE6_BIT: usize = 47;
/// Low five bits of the tree-address mask.
pub const LOW_MASK_OFFSET: usize = 51;
pub const LOW_MASK_WIDTH: usize = 5;

/// 8-bit fade-time code.
pub const FADE_OFFSET: usize = 56;
pub const FADE_WIDTH: usize = 8;

/// Bit offset of level field `index` (0-based, `index < LEVEL_COUNT`).
///
/// Levels 0–4 follow the instrument flag, 5–9 follow the all-units flag,
/// 10–14 open the third 16-bit word, and level 15 lands after the relocated
/// address bit.
pub fn level_offset(index: usize) -> usize {
    debug_assert!(index < LEVEL_COUNT);
    match index {
        0..=4 => 1 + LEVEL_WIDTH * index,
        5..=9 => 17 + LEVEL_WIDTH * (index - 5),
        10..=14 => 32 + LEVEL_WIDTH * (index - 10),
        _ => 48,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_offsets_match_the_wire_table() {
        let expected = [
            1, 4, 7, 10, 13, 17, 20, 23, 26, 29, 32, 35, 38, 41, 44, 48,
        ];
        for (index, offset) in expected.iter().enumerate() {
            assert_eq!(level_offset(index), *offset, "level {index}");
        }
    }

    #[test]
    fn fields_never_overlap() {
        let mut used = [false; FRAME_LEN * 8];
        let mut claim = |offset: usize, width: usize| {
            for bit in offset..offset + width {
                assert!(!used[bit], "bit {bit} claimed twice");
                used[bit] = true;
            }
        };
        claim(INSTRUMENT_BIT, 1);
        for index in 0..LEVEL_COUNT {
            claim(level_offset(index), LEVEL_WIDTH);
        }
        claim(ALL_TREES_BIT, 1);
        claim(TREE6_BIT, 1);
        claim(LOW_MASK_OFFSET, LOW_MASK_WIDTH);
        claim(FADE_OFFSET, FADE_WIDTH);
        assert!(used.iter().all(|&bit| bit), "frame has unused bits");
    }
}
