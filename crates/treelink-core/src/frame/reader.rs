use super::error::FrameError;
use crate::common::bits;

/// Bit-addressed read access to a received payload.
pub struct FrameReader<'a> {
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FrameError> {
        if self.payload.len() < needed {
            return Err(FrameError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    /// Read a single bit as a flag.
    pub fn read_flag(&self, offset: usize) -> Result<bool, FrameError> {
        Ok(self.read_bits(offset, 1)? != 0)
    }

    /// Read `width` bits (at most 16), LSB-first from `offset`.
    pub fn read_bits(&self, offset: usize, width: usize) -> Result<u16, FrameError> {
        let needed = (offset + width).div_ceil(8);
        self.require_len(needed)?;
        Ok(bits::read_bits(self.payload, offset, width))
    }
}

#[cfg(test)]
mod tests {
    use super::FrameReader;

    #[test]
    fn reads_flags_and_fields() {
        let payload = [0b0000_0101u8, 0b0000_0011];
        let reader = FrameReader::new(&payload);
        assert!(reader.read_flag(0).unwrap());
        assert!(!reader.read_flag(1).unwrap());
        assert_eq!(reader.read_bits(2, 8).unwrap(), 0b1100_0001);
    }

    #[test]
    fn short_payload_is_rejected() {
        let payload = [0u8; 1];
        let reader = FrameReader::new(&payload);
        let err = reader.read_bits(4, 8).unwrap_err();
        assert!(err.to_string().contains("payload too short"));
    }

    #[test]
    fn field_ending_on_byte_edge_fits() {
        let payload = [0xffu8; 1];
        let reader = FrameReader::new(&payload);
        assert_eq!(reader.read_bits(5, 3).unwrap(), 0b111);
    }
}
