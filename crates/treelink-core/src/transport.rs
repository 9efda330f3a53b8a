//! Radio transport contract.
//!
//! The codec never touches the radio: a driver implementing
//! [`RadioTransport`] moves raw frame bytes over the shared half-duplex
//! channel and the control loop schedules codec calls around it.
//! Retransmission, acknowledgement and collision handling live behind this
//! trait, not in the codec.

use thiserror::Error;

use crate::config::NodeConfig;

/// One raw frame received from the channel. Payload bytes are handed to
/// [`frame::unpack`](crate::frame::unpack) or
/// [`ControlFrame::decode`](crate::control::ControlFrame::decode) as-is.
#[derive(Debug, Clone)]
pub struct RadioEvent {
    pub payload: Vec<u8>,
}

/// Half-duplex radio driver seam.
pub trait RadioTransport {
    /// Transmit one raw frame.
    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError>;

    /// Poll for a received frame; `None` when the channel is idle.
    fn poll(&mut self) -> Result<Option<RadioEvent>, TransportError>;

    /// Apply node id and group settings to the radio.
    fn configure(&mut self, config: &NodeConfig) -> Result<(), TransportError>;
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("radio error: {0}")]
    Radio(String),
}
