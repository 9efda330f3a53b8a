use super::layout;
use crate::common::bits;

/// Bit-addressed write access over an owned, zeroed frame buffer.
///
/// Writes cannot fail: every layout offset fits inside the fixed-size frame,
/// and values wider than their field are truncated to the field width.
pub struct FrameWriter {
    frame: [u8; layout::FRAME_LEN],
}

impl FrameWriter {
    pub fn new() -> Self {
        Self {
            frame: [0u8; layout::FRAME_LEN],
        }
    }

    pub fn write_flag(&mut self, offset: usize, value: bool) {
        self.write_bits(offset, 1, u16::from(value));
    }

    pub fn write_bits(&mut self, offset: usize, width: usize, value: u16) {
        bits::write_bits(&mut self.frame, offset, width, value);
    }

    pub fn finish(self) -> [u8; layout::FRAME_LEN] {
        self.frame
    }
}

impl Default for FrameWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::FrameWriter;
    use crate::frame::layout;

    #[test]
    fn starts_zeroed() {
        assert_eq!(FrameWriter::new().finish(), [0u8; layout::FRAME_LEN]);
    }

    #[test]
    fn writes_land_at_their_offsets() {
        let mut writer = FrameWriter::new();
        writer.write_flag(0, true);
        writer.write_bits(layout::FADE_OFFSET, layout::FADE_WIDTH, 0x5a);
        let frame = writer.finish();
        assert_eq!(frame[0], 0x01);
        assert_eq!(frame[7], 0x5a);
    }

    #[test]
    fn oversized_values_truncate_to_field_width() {
        let mut writer = FrameWriter::new();
        writer.write_bits(layout::LOW_MASK_OFFSET, layout::LOW_MASK_WIDTH, 0xffff);
        let frame = writer.finish();
        assert_eq!(frame[6], 0b1111_1000);
        assert_eq!(frame[7], 0x00);
    }
}
