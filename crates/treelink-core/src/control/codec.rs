use serde::{Deserialize, Serialize};

use super::error::ControlError;
use super::layout;
use crate::common::bits;

/// What an address-control frame asks the receiving unit to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Assign the carried unit id to the receiving tree.
    #[default]
    SetTreeId,
    /// Ask the receiving tree to report its id.
    IdQuery,
}

impl ControlMode {
    fn from_wire(value: u8) -> Result<ControlMode, ControlError> {
        match value {
            0 => Ok(ControlMode::SetTreeId),
            1 => Ok(ControlMode::IdQuery),
            value => Err(ControlError::UnknownMode { value }),
        }
    }

    fn to_wire(self) -> u8 {
        match self {
            ControlMode::SetTreeId => 0,
            ControlMode::IdQuery => 1,
        }
    }
}

/// Out-of-band frame assigning or querying a unit's address.
///
/// Default construction zeroes the mode and unit id and pre-sets the
/// verification word, so a freshly built frame always verifies.
///
/// # Examples
/// ```
/// use treelink_core::control::{ControlFrame, ControlMode};
///
/// let frame = ControlFrame::new(ControlMode::SetTreeId, 3);
/// assert!(frame.verify());
/// let decoded = ControlFrame::decode(&frame.encode())?;
/// assert_eq!(decoded.unit_id(), 3);
/// # Ok::<(), treelink_core::control::ControlError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFrame {
    mode: ControlMode,
    unit_id: u8,
    check: u16,
}

impl Default for ControlFrame {
    fn default() -> Self {
        Self {
            mode: ControlMode::default(),
            unit_id: 0,
            check: layout::CHECK_VALUE,
        }
    }
}

impl ControlFrame {
    /// Build a frame with the verification word pre-set. The unit id is
    /// truncated to its 3-bit wire range.
    pub fn new(mode: ControlMode, unit_id: u8) -> Self {
        Self {
            mode,
            unit_id: unit_id & 0x07,
            check: layout::CHECK_VALUE,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn unit_id(&self) -> u8 {
        self.unit_id
    }

    /// Whether the verification word matches the expected constant.
    ///
    /// Receivers call this before acting on `mode`/`unit_id` to reduce the
    /// chance of obeying another device's traffic. A matching word from a
    /// foreign frame is possible; this is a filter, not a checksum.
    pub fn verify(&self) -> bool {
        self.check == layout::CHECK_VALUE
    }

    /// Encode to the padded 3-byte wire form.
    pub fn encode(&self) -> [u8; layout::FRAME_LEN] {
        let mut frame = [0u8; layout::FRAME_LEN];
        bits::write_bits(
            &mut frame,
            layout::MODE_OFFSET,
            layout::MODE_WIDTH,
            u16::from(self.mode.to_wire()),
        );
        bits::write_bits(
            &mut frame,
            layout::UNIT_OFFSET,
            layout::UNIT_WIDTH,
            u16::from(self.unit_id),
        );
        bits::write_bits(
            &mut frame,
            layout::CHECK_OFFSET,
            layout::CHECK_WIDTH,
            self.check,
        );
        frame
    }

    /// Decode a received payload. A mismatched verification word still
    /// decodes (see [`verify`](Self::verify)); reserved mode values and
    /// short payloads do not.
    pub fn decode(payload: &[u8]) -> Result<ControlFrame, ControlError> {
        if payload.len() < layout::FRAME_LEN {
            return Err(ControlError::TooShort {
                needed: layout::FRAME_LEN,
                actual: payload.len(),
            });
        }
        let mode = ControlMode::from_wire(
            bits::read_bits(payload, layout::MODE_OFFSET, layout::MODE_WIDTH) as u8,
        )?;
        let unit_id = bits::read_bits(payload, layout::UNIT_OFFSET, layout::UNIT_WIDTH) as u8;
        let check = bits::read_bits(payload, layout::CHECK_OFFSET, layout::CHECK_WIDTH);
        Ok(ControlFrame {
            mode,
            unit_id,
            check,
        })
    }
}
