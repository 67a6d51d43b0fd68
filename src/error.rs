use crate::transport::error::TransportError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The application is not properly configured.")]
    Configuration(#[from] ConfigurationError),
    #[error("An error has occurred with the mail transport.")]
    Transport(#[from] TransportError),
}

#[derive(Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Missing email sender name")]
    MissingEmailSenderName,
    #[error("Missing email sender address")]
    MissingEmailSenderAddress,
    #[error("Missing SMTP login")]
    MissingSmtpLogin,
    #[error("Missing SMTP password")]
    MissingSmtpPassword,
    #[error("SMTP port must be a number between 0 and 65535")]
    InvalidSmtpPort,
    #[error("SMTP timeout must be a number of seconds")]
    InvalidSmtpTimeout,
    #[error("Missing subject")]
    MissingSubject,
    #[error("Missing body")]
    MissingBody,
}
