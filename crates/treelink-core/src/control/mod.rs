//! Out-of-band address-control frames.
//!
//! A control frame assigns a unit id to a tree or puts it into id-query
//! mode. It is much smaller than a lighting frame and carries a fixed
//! verification word so a receiver can reject unrelated traffic on the
//! shared channel before acting on the mode and unit id. The word is a
//! recognition filter, not a checksum; collisions with foreign frames are
//! possible, just unlikely.

pub mod codec;
pub mod error;
pub mod layout;

pub use codec::{ControlFrame, ControlMode};
pub use error::ControlError;
pub use layout::{CHECK_VALUE, FRAME_LEN};
