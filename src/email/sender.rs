use crate::email::address_validator::{AddressValidator, RegexAddressValidator};
use crate::email::config::EmailConfiguration;
use crate::email::message::{SenderIdentity, compose};
use crate::transport::Transport;
use log::{error, info, warn};

/// Sends notifications to a fixed list of recipients.
///
/// Recipients are validated once, when the sender is built: malformed addresses are dropped
/// and never reach the transport. Sending never fails loudly, it reports a boolean instead;
/// the reason of a failure is only available in the logs.
#[derive(Debug)]
pub struct EmailSender<T: Transport> {
    sender_identity: SenderIdentity,
    recipients: Vec<String>,
    transport: T,
}

impl<T: Transport> EmailSender<T> {
    pub fn new(configuration: EmailConfiguration, transport: T) -> Self {
        Self::with_validator(configuration, transport, &RegexAddressValidator::default())
    }

    pub fn with_validator<V: AddressValidator>(
        configuration: EmailConfiguration,
        transport: T,
        validator: &V,
    ) -> Self {
        let (sender_identity, raw_recipients) = configuration.dissolve();
        let recipients = validator.filter_valid(raw_recipients.as_slice());
        if recipients.is_empty() && !raw_recipients.is_empty() {
            warn!(
                "None of the {} configured recipients is a valid email address",
                raw_recipients.len()
            );
        }

        Self {
            sender_identity,
            recipients,
            transport,
        }
    }

    pub fn has_recipients(&self) -> bool {
        !self.recipients.is_empty()
    }

    /// Send a message to every valid recipient.
    /// Returns `true` iff the transport accepted the message.
    pub fn send_email(&self, subject: &str, body: &str) -> bool {
        if !self.has_recipients() {
            return false;
        }

        let message = compose(&self.sender_identity, &self.recipients, subject, body);
        match self.transport.send(&message) {
            Ok(()) => {
                info!(
                    "Email \"{subject}\" sent to {} recipient(s)",
                    self.recipients.len()
                );
                true
            }
            Err(e) => {
                error!(
                    "Couldn't send email \"{subject}\" to {:?}\n{e:#?}",
                    self.recipients
                );
                false
            }
        }
    }

    pub fn sender_identity(&self) -> &SenderIdentity {
        &self.sender_identity
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::error::TransportError;
    use crate::transport::error::TransportError::{CantConnectToSmtpServer, CantSendMessage};
    use crate::transport::recording::RecordingTransport;
    use parameterized::{ide, parameterized};

    ide!();

    const TEST_SENDER_ADDRESS: &str = "outgoing@registry.example";
    const TEST_SENDER_NAME: &str = "outgoing display name";
    const TEST_SUBJECT: &str = "Welcome to the Internet";
    const TEST_BODY: &str = "It is a dark and scary place.";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn create_sender(
        recipients: &[&str],
        transport: RecordingTransport,
    ) -> EmailSender<RecordingTransport> {
        init();
        let configuration = EmailConfiguration::new(
            TEST_SENDER_ADDRESS.to_owned(),
            TEST_SENDER_NAME.to_owned(),
            recipients.iter().map(|recipient| recipient.to_string()).collect(),
        );
        EmailSender::new(configuration, transport)
    }

    // region has_recipients
    #[parameterized(
        recipients = {
            vec!["johnny@fakesite.tld"],
            vec!["foo@example.com", "bar@example.com"],
            vec!["foo@example.com", "1iñvalidemail"],
            vec!["1iñvalidemail", "foo@example.com"],
        }
    )]
    fn should_have_recipients(recipients: Vec<&str>) {
        let sender = create_sender(&recipients, RecordingTransport::default());

        assert!(sender.has_recipients());
    }

    #[parameterized(
        recipients = {
            vec![],
            vec!["1iñvalidemail"],
            vec!["1iñvalidemail", "foo@", "@example.com"],
        }
    )]
    fn should_not_have_recipients(recipients: Vec<&str>) {
        let sender = create_sender(&recipients, RecordingTransport::default());

        assert!(!sender.has_recipients());
    }
    // endregion

    // region send_email
    #[test]
    fn should_send_to_one_address() {
        let sender = create_sender(&["johnny@fakesite.tld"], RecordingTransport::default());

        assert!(sender.send_email(TEST_SUBJECT, TEST_BODY));

        let messages = sender.transport().attempted_messages();
        assert_eq!(1, messages.len());
        let message = &messages[0];
        assert_eq!(&vec!["johnny@fakesite.tld".to_owned()], message.recipients());
        assert_eq!(TEST_SUBJECT, message.subject());
        assert_eq!(TEST_BODY, message.body());
        assert_eq!(TEST_SENDER_ADDRESS, message.sender().address());
        assert_eq!(TEST_SENDER_NAME, message.sender().display_name());
    }

    #[test]
    fn should_send_to_multiple_addresses() {
        let sender = create_sender(
            &["foo@example.com", "bar@example.com"],
            RecordingTransport::default(),
        );

        assert!(sender.send_email(TEST_SUBJECT, TEST_BODY));

        let messages = sender.transport().attempted_messages();
        assert_eq!(1, messages.len());
        assert_eq!(
            &vec!["foo@example.com".to_owned(), "bar@example.com".to_owned()],
            messages[0].recipients()
        );
    }

    #[test]
    fn should_ignore_malformed_address() {
        let sender = create_sender(
            &["foo@example.com", "1iñvalidemail"],
            RecordingTransport::default(),
        );

        assert!(sender.send_email(TEST_SUBJECT, TEST_BODY));

        let messages = sender.transport().attempted_messages();
        assert_eq!(1, messages.len());
        assert_eq!(&vec!["foo@example.com".to_owned()], messages[0].recipients());
    }

    #[test]
    fn should_keep_duplicated_addresses() {
        let sender = create_sender(
            &["foo@example.com", "foo@example.com"],
            RecordingTransport::default(),
        );

        assert_eq!(["foo@example.com", "foo@example.com"], sender.recipients());
    }

    #[parameterized(
        recipients = {
            vec![],
            vec!["1iñvalidemail"],
        }
    )]
    fn should_not_send_without_recipients(recipients: Vec<&str>) {
        let sender = create_sender(&recipients, RecordingTransport::default());

        assert!(!sender.send_email(TEST_SUBJECT, TEST_BODY));

        assert_eq!(0, sender.transport().attempts());
    }

    #[parameterized(
        failure = { CantSendMessage, CantConnectToSmtpServer }
    )]
    fn should_return_false_when_transport_fails(failure: TransportError) {
        let sender = create_sender(&["foo@example.com"], RecordingTransport::failing(failure));

        assert!(!sender.send_email(TEST_SUBJECT, TEST_BODY));

        let messages = sender.transport().attempted_messages();
        assert_eq!(1, messages.len());
        let message = &messages[0];
        assert_eq!(&vec!["foo@example.com".to_owned()], message.recipients());
        assert_eq!(TEST_SUBJECT, message.subject());
        assert_eq!(TEST_BODY, message.body());
    }

    #[test]
    fn should_send_identical_messages_on_repeated_calls() {
        let sender = create_sender(&["foo@example.com"], RecordingTransport::default());

        assert!(sender.send_email(TEST_SUBJECT, TEST_BODY));
        assert!(sender.send_email(TEST_SUBJECT, TEST_BODY));

        let messages = sender.transport().attempted_messages();
        assert_eq!(2, messages.len());
        assert_eq!(messages[0], messages[1]);
    }

    #[test]
    fn should_keep_recipients_after_failed_send() {
        let sender = create_sender(
            &["foo@example.com", "bar@example.com"],
            RecordingTransport::failing(CantSendMessage),
        );

        assert!(!sender.send_email(TEST_SUBJECT, TEST_BODY));
        assert!(!sender.send_email(TEST_SUBJECT, TEST_BODY));

        assert!(sender.has_recipients());
        assert_eq!(["foo@example.com", "bar@example.com"], sender.recipients());
        assert_eq!(2, sender.transport().attempts());
    }
    // endregion

    // region with_validator
    #[test]
    fn should_filter_recipients_with_given_validator() {
        init();
        let configuration = EmailConfiguration::new(
            TEST_SENDER_ADDRESS.to_owned(),
            TEST_SENDER_NAME.to_owned(),
            vec!["foo@example.com".to_owned(), "bar@example.org".to_owned()],
        );
        let validator = RegexAddressValidator::new(r"^[a-z]+@example\.org$").unwrap();

        let sender =
            EmailSender::with_validator(configuration, RecordingTransport::default(), &validator);

        assert_eq!(["bar@example.org"], sender.recipients());
    }
    // endregion
}
