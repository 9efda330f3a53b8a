//! Treelink core library: the wire codec for tree lighting instructions.
//!
//! This crate implements the bit-exact codec used between a lighting
//! controller and up to six addressable "tree" units sharing one
//! half-duplex radio channel. A [`LightingPacket`] is the full-fidelity
//! logical form; [`frame::pack`] compresses it into an 8-byte wire frame
//! (3-bit quantized levels, 100 ms fade resolution, split address mask) and
//! [`frame::unpack`] recovers the logical form on the receiving side. The
//! out-of-band [`control::ControlFrame`] assigns or queries a unit's
//! address.
//!
//! All codec operations are pure and side-effect free; radio I/O is behind
//! the [`transport::RadioTransport`] contract and persistent settings behind
//! [`config::NodeConfig`]. Wire-format bit offsets live in the `layout`
//! modules, safe bit access in the readers/writers, and domain-level
//! conversion in the codecs.
//!
//! Invariants:
//! - The frame layout (bit offsets and widths) is fixed and explicit; no
//!   compiler-defined bit-field packing is involved.
//! - Packing is total; unpacking fails only on short input.
//! - Quantization is lossy but stable: re-quantizing a reconstructed level
//!   yields the original code.
//!
//! # Examples
//! ```
//! use treelink_core::{Instrument, LightingPacket, TreeMask, frame};
//!
//! let packet = LightingPacket {
//!     instrument: Instrument::Dimmer,
//!     pwm_levels: [128; treelink_core::LEVEL_COUNT],
//!     memory_index: 0,
//!     fade_time_ms: 500,
//!     trees: TreeMask::single(3).unwrap(),
//! };
//! let wire = frame::pack(&packet);
//! let decoded = frame::unpack(&wire)?;
//! assert_eq!(decoded.trees, packet.trees);
//! assert_eq!(decoded.fade_time_ms, 500);
//! # Ok::<(), treelink_core::frame::FrameError>(())
//! ```

use serde::{Deserialize, Serialize};

pub(crate) mod common;
pub mod config;
pub mod control;
pub mod frame;
pub mod transport;

/// Number of PWM level slots carried by every lighting instruction.
pub const LEVEL_COUNT: usize = 16;
/// Number of individually addressable tree units.
pub const TREE_COUNT: u8 = 6;

/// Which kind of instruction a packet carries.
///
/// `Dimmer` drives the 16 PWM level slots directly; `Memory` recalls a
/// pre-stored scene by bank index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    #[default]
    Dimmer,
    Memory,
}

/// Address mask selecting which tree units an instruction applies to.
///
/// Bit *n−1* set means the instruction applies to tree *n*, for trees 1
/// through [`TREE_COUNT`]. The reserved value `0xFF` ([`TreeMask::ALL`]) is a
/// sentinel meaning "every unit, including units without an assigned id" and
/// overrides the bit-by-bit reading.
///
/// # Examples
/// ```
/// use treelink_core::TreeMask;
///
/// let mask = TreeMask(0b0000_0101);
/// assert!(mask.applies_to(1));
/// assert!(!mask.applies_to(2));
/// assert!(mask.applies_to(3));
/// assert!(TreeMask::ALL.applies_to(6));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeMask(pub u8);

impl TreeMask {
    /// Addresses no unit at all.
    pub const NONE: TreeMask = TreeMask(0x00);
    /// Sentinel addressing every unit, assigned id or not.
    pub const ALL: TreeMask = TreeMask(0xff);

    /// Mask addressing exactly one tree, numbered 1 through [`TREE_COUNT`].
    /// Returns `None` for tree numbers outside that range.
    pub fn single(tree: u8) -> Option<TreeMask> {
        if tree == 0 || tree > TREE_COUNT {
            return None;
        }
        Some(TreeMask(1 << (tree - 1)))
    }

    /// Whether this is the all-units sentinel.
    pub fn is_all(&self) -> bool {
        self.0 == 0xff
    }

    /// Whether the instruction applies to the given tree number (1-based).
    /// The sentinel applies to every tree.
    pub fn applies_to(&self, tree: u8) -> bool {
        if tree == 0 || tree > TREE_COUNT {
            return false;
        }
        self.is_all() || self.0 & (1 << (tree - 1)) != 0
    }

    /// Tree numbers addressed by this mask, in ascending order. The sentinel
    /// yields every tree.
    pub fn trees(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=TREE_COUNT).filter(move |&tree| self.applies_to(tree))
    }
}

/// Full-fidelity lighting instruction, before wire compression.
///
/// Exactly one of `pwm_levels` / `memory_index` is active, selected by
/// `instrument`; consumers ignore the other. `fade_time_ms` is held in
/// milliseconds but survives the wire only at 100 ms resolution, capped at
/// [`frame::MAX_FADE_MS`].
///
/// # Examples
/// ```
/// use treelink_core::LightingPacket;
///
/// let packet = LightingPacket::default();
/// assert_eq!(packet.fade_time_ms, 0);
/// assert_eq!(packet.trees, treelink_core::TreeMask::NONE);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingPacket {
    /// Dimmer levels or memory recall.
    pub instrument: Instrument,
    /// Per-channel intensity, 0–255; meaningful only in `Dimmer` mode.
    pub pwm_levels: [u8; LEVEL_COUNT],
    /// Scene bank index; meaningful only in `Memory` mode.
    pub memory_index: u8,
    /// Fade duration in milliseconds.
    pub fade_time_ms: u32,
    /// Which tree units the instruction addresses.
    pub trees: TreeMask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_packet_is_fully_zeroed() {
        let packet = LightingPacket::default();
        assert_eq!(packet.instrument, Instrument::Dimmer);
        assert_eq!(packet.pwm_levels, [0u8; LEVEL_COUNT]);
        assert_eq!(packet.memory_index, 0);
        assert_eq!(packet.fade_time_ms, 0);
        assert_eq!(packet.trees, TreeMask::NONE);
    }

    #[test]
    fn single_tree_masks() {
        assert_eq!(TreeMask::single(1), Some(TreeMask(0b000001)));
        assert_eq!(TreeMask::single(6), Some(TreeMask(0b100000)));
        assert_eq!(TreeMask::single(0), None);
        assert_eq!(TreeMask::single(7), None);
    }

    #[test]
    fn sentinel_applies_to_every_tree() {
        assert!(TreeMask::ALL.is_all());
        let trees: Vec<u8> = TreeMask::ALL.trees().collect();
        assert_eq!(trees, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn mask_iterates_addressed_trees_only() {
        let mask = TreeMask(0b100101);
        let trees: Vec<u8> = mask.trees().collect();
        assert_eq!(trees, vec![1, 3, 6]);
    }

    #[test]
    fn out_of_range_trees_are_never_addressed() {
        assert!(!TreeMask::ALL.applies_to(0));
        assert!(!TreeMask::ALL.applies_to(7));
    }

    #[test]
    fn mask_serializes_transparently() {
        let json = serde_json::to_string(&TreeMask(7)).expect("mask json");
        assert_eq!(json, "7");
    }
}
