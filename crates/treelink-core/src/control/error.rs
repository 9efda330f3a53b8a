use thiserror::Error;

/// Errors returned when decoding a control frame.
///
/// A wrong verification word is not an error: decoding succeeds and the
/// caller checks [`verify`](super::ControlFrame::verify) before trusting the
/// frame. Reserved mode values are rejected outright.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("unknown control mode: {value}")]
    UnknownMode { value: u8 },
}
