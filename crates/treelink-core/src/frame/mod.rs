//! Lighting-frame wire codec.
//!
//! The codec compresses a [`LightingPacket`](crate::LightingPacket) into a
//! fixed 8-byte frame: a 1-bit instrument flag, sixteen 3-bit quantized
//! levels, the split tree-address mask (5 low bits, 1 relocated high bit and
//! an all-units flag), and an 8-bit fade-time code. Field positions keep the
//! surrounding fields aligned to 16-bit boundaries, which is why level 15
//! and the address mask's high bit sit apart from their neighbours.
//!
//! Bit offsets are defined once in `layout` and never derived from field
//! ordering; `reader` and `writer` provide bit-addressed access, `quant` and
//! `fade` the two lossy value codecs, and `codec` the domain-level
//! conversion. Packing is total; unpacking fails only on short input.

pub mod codec;
pub mod error;
pub mod fade;
pub mod layout;
pub mod quant;
pub mod reader;
pub mod writer;

pub use codec::{WireFrame, pack, unpack};
pub use error::FrameError;
pub use fade::{FADE_STEP_MS, MAX_FADE_MS, decode_fade, encode_fade};
pub use layout::FRAME_LEN;
pub use quant::{dequantize, quantize};
