//! Fade-time compression to an 8-bit code at 100 ms resolution.

/// Wire resolution of the fade time.
pub const FADE_STEP_MS: u32 = 100;
/// Longest fade the wire code can express.
pub const MAX_FADE_MS: u32 = 255 * FADE_STEP_MS;

/// Encode a fade duration in milliseconds. Truncates to 100 ms steps and
/// saturates at [`MAX_FADE_MS`].
///
/// # Examples
/// ```
/// use treelink_core::frame::{MAX_FADE_MS, encode_fade};
///
/// assert_eq!(encode_fade(500), 5);
/// assert_eq!(encode_fade(599), 5);
/// assert_eq!(encode_fade(MAX_FADE_MS + 1), 255);
/// ```
pub fn encode_fade(ms: u32) -> u8 {
    (ms / FADE_STEP_MS).min(255) as u8
}

/// Decode a fade-time code back to milliseconds.
pub fn decode_fade(code: u8) -> u32 {
    u32::from(code) * FADE_STEP_MS
}

#[cfg(test)]
mod tests {
    use super::{FADE_STEP_MS, MAX_FADE_MS, decode_fade, encode_fade};

    #[test]
    fn exact_multiples_round_trip() {
        for code in 0..=255u8 {
            let ms = u32::from(code) * FADE_STEP_MS;
            assert_eq!(decode_fade(encode_fade(ms)), ms);
        }
    }

    #[test]
    fn sub_step_durations_truncate() {
        assert_eq!(encode_fade(0), 0);
        assert_eq!(encode_fade(99), 0);
        assert_eq!(encode_fade(101), 1);
        assert_eq!(decode_fade(encode_fade(250)), 200);
    }

    #[test]
    fn long_fades_saturate() {
        assert_eq!(encode_fade(MAX_FADE_MS), 255);
        assert_eq!(encode_fade(MAX_FADE_MS + 100), 255);
        assert_eq!(encode_fade(u32::MAX), 255);
        assert_eq!(decode_fade(255), MAX_FADE_MS);
    }
}
