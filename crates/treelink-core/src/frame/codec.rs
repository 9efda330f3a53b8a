use super::error::FrameError;
use super::fade::{decode_fade, encode_fade};
use super::layout;
use super::quant::{dequantize, quantize};
use super::reader::FrameReader;
use super::writer::FrameWriter;
use crate::{Instrument, LEVEL_COUNT, LightingPacket, TreeMask};

/// Packed 8-byte wire form of a lighting instruction.
pub type WireFrame = [u8; layout::FRAME_LEN];

/// Pack a logical instruction into its compact wire frame.
///
/// Levels are quantized to 3 bits, the fade time to 100 ms steps, and the
/// tree mask is split across the low-mask field, the relocated high bit and
/// the all-units flag. The low/high mask fields are written even when the
/// all-units flag is set; receivers must treat them as stale in that case.
///
/// In `Memory` mode the frame has no dedicated field for the bank index, so
/// level slot 0 carries `quantize(memory_index)` and the remaining slots are
/// zero; the index survives the wire at 3-bit precision.
pub fn pack(packet: &LightingPacket) -> WireFrame {
    let mut writer = FrameWriter::new();

    writer.write_flag(
        layout::INSTRUMENT_BIT,
        packet.instrument == Instrument::Memory,
    );

    match packet.instrument {
        Instrument::Dimmer => {
            for (index, level) in packet.pwm_levels.iter().enumerate() {
                writer.write_bits(
                    layout::level_offset(index),
                    layout::LEVEL_WIDTH,
                    u16::from(quantize(*level)),
                );
            }
        }
        Instrument::Memory => {
            writer.write_bits(
                layout::level_offset(0),
                layout::LEVEL_WIDTH,
                u16::from(quantize(packet.memory_index)),
            );
        }
    }

    writer.write_bits(
        layout::FADE_OFFSET,
        layout::FADE_WIDTH,
        u16::from(encode_fade(packet.fade_time_ms)),
    );

    let mask = packet.trees.0;
    writer.write_bits(
        layout::LOW_MASK_OFFSET,
        layout::LOW_MASK_WIDTH,
        u16::from(mask & 0x1f),
    );
    writer.write_flag(layout::TREE6_BIT, mask & 0x20 != 0);
    writer.write_flag(layout::ALL_TREES_BIT, packet.trees.is_all());

    writer.finish()
}

/// Unpack a received payload into a logical instruction.
///
/// The all-units flag is tested before the mask fields: when set, the mask
/// is the 0xFF sentinel and the low/high fields are not read. Fails only
/// when the payload is shorter than one frame.
pub fn unpack(payload: &[u8]) -> Result<LightingPacket, FrameError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::FRAME_LEN)?;

    let trees = if reader.read_flag(layout::ALL_TREES_BIT)? {
        TreeMask::ALL
    } else {
        let low = reader.read_bits(layout::LOW_MASK_OFFSET, layout::LOW_MASK_WIDTH)? as u8;
        let high = u8::from(reader.read_flag(layout::TREE6_BIT)?);
        TreeMask(low | (high << 5))
    };

    let instrument = if reader.read_flag(layout::INSTRUMENT_BIT)? {
        Instrument::Memory
    } else {
        Instrument::Dimmer
    };

    let mut pwm_levels = [0u8; LEVEL_COUNT];
    let mut memory_index = 0u8;
    match instrument {
        Instrument::Dimmer => {
            for (index, level) in pwm_levels.iter_mut().enumerate() {
                let code = reader.read_bits(layout::level_offset(index), layout::LEVEL_WIDTH)?;
                *level = dequantize(code as u8);
            }
        }
        Instrument::Memory => {
            let code = reader.read_bits(layout::level_offset(0), layout::LEVEL_WIDTH)?;
            memory_index = dequantize(code as u8);
        }
    }

    let fade_code = reader.read_bits(layout::FADE_OFFSET, layout::FADE_WIDTH)? as u8;

    Ok(LightingPacket {
        instrument,
        pwm_levels,
        memory_index,
        fade_time_ms: decode_fade(fade_code),
        trees,
    })
}
