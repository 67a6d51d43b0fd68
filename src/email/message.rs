use derive_getters::Getters;

/// The "From" identity of every message sent by an [`EmailSender`](crate::email::sender::EmailSender).
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SenderIdentity {
    address: String,
    display_name: String,
}

impl SenderIdentity {
    pub fn new(address: String, display_name: String) -> Self {
        Self {
            address,
            display_name,
        }
    }
}

/// A fully composed message, ready to be handed to a [`Transport`](crate::transport::Transport).
/// All recipients are primary recipients.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct OutgoingMessage {
    sender: SenderIdentity,
    recipients: Vec<String>,
    subject: String,
    body: String,
}

/// Build a message from already validated recipients.
/// Subject and body are kept verbatim.
pub fn compose(
    sender: &SenderIdentity,
    recipients: &[String],
    subject: &str,
    body: &str,
) -> OutgoingMessage {
    OutgoingMessage {
        sender: sender.clone(),
        recipients: recipients.to_vec(),
        subject: subject.to_owned(),
        body: body.to_owned(),
    }
}
