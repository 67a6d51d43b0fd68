use crate::email::message::SenderIdentity;
use crate::error::ConfigurationError;
use crate::error::ConfigurationError::{MissingEmailSenderAddress, MissingEmailSenderName};
use crate::tools::env_args::{retrieve_arg_values, retrieve_expected_arg_value};
use derive_getters::{Dissolve, Getters};

const EMAIL_SENDER_NAME_ARG: &str = "--email-sender-name";
const EMAIL_SENDER_ADDRESS_ARG: &str = "--email-sender-address";
const EMAIL_RECIPIENTS_ARG: &str = "--email-recipients";

/// Who sends, and to whom.
/// Recipients are kept raw: they are validated when an `EmailSender` is built.
#[derive(Debug, Clone, Getters, Dissolve)]
pub struct EmailConfiguration {
    sender: SenderIdentity,
    recipients: Vec<String>,
}

impl EmailConfiguration {
    pub fn new(sender_address: String, sender_name: String, recipients: Vec<String>) -> Self {
        Self {
            sender: SenderIdentity::new(sender_address, sender_name),
            recipients,
        }
    }

    /// Read the configuration from `--email-sender-name`, `--email-sender-address`
    /// and `--email-recipients` (comma-separated).
    pub fn from_args() -> Result<Self, ConfigurationError> {
        let sender_name = retrieve_expected_arg_value(EMAIL_SENDER_NAME_ARG, MissingEmailSenderName)?;
        let sender_address =
            retrieve_expected_arg_value(EMAIL_SENDER_ADDRESS_ARG, MissingEmailSenderAddress)?;
        let recipients = retrieve_arg_values(EMAIL_RECIPIENTS_ARG);

        Ok(Self::new(sender_address, sender_name, recipients))
    }
}
