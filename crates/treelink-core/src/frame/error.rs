use thiserror::Error;

/// Errors returned when decoding a lighting frame.
///
/// The codec itself is total over the 8-byte frame; the only failure is a
/// payload from the radio that is too short to contain one.
///
/// # Examples
/// ```
/// use treelink_core::frame::FrameError;
///
/// let err = FrameError::TooShort { needed: 8, actual: 3 };
/// assert!(err.to_string().contains("payload too short"));
/// ```
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
