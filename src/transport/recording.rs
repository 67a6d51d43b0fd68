use crate::email::message::OutgoingMessage;
use crate::transport::Transport;
use crate::transport::error::TransportError;
use std::sync::{Mutex, PoisonError};

/// In-memory transport for tests.
/// Every message handed to it is recorded, whether delivery then fails or not.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    attempted_messages: Mutex<Vec<OutgoingMessage>>,
    failure: Option<TransportError>,
}

impl RecordingTransport {
    /// A transport rejecting every message with `failure`.
    pub fn failing(failure: TransportError) -> Self {
        Self {
            attempted_messages: Mutex::default(),
            failure: Some(failure),
        }
    }

    pub fn attempted_messages(&self) -> Vec<OutgoingMessage> {
        self.attempted_messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempted_messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, message: &OutgoingMessage) -> Result<(), TransportError> {
        self.attempted_messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());

        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}
