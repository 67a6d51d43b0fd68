pub mod error;
#[cfg(any(test, feature = "test"))]
pub mod recording;
pub mod smtp;

use crate::email::message::OutgoingMessage;
use crate::transport::error::TransportError;

/// Capability to deliver a composed message.
///
/// Delivery is all-or-nothing: either the channel accepts the message, or an error is returned.
/// Any timeout policy belongs to the implementation.
pub trait Transport {
    fn send(&self, message: &OutgoingMessage) -> Result<(), TransportError>;
}
