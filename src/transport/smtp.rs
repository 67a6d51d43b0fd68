use crate::email::message::OutgoingMessage;
use crate::error::ConfigurationError;
use crate::error::ConfigurationError::{
    InvalidSmtpPort, InvalidSmtpTimeout, MissingSmtpLogin, MissingSmtpPassword,
};
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use crate::tools::log_message_and_return;
use crate::transport::Transport;
use crate::transport::error::TransportError;
use crate::transport::error::TransportError::{
    CantConnectToSmtpServer, CantCreateRuntime, CantSendMessage,
};
use derive_getters::Getters;
use log::debug;
use mail_send::SmtpClientBuilder;
use mail_send::mail_builder::MessageBuilder;
use std::time::Duration;
use tokio::runtime::Runtime;

type Result<T, E = TransportError> = std::result::Result<T, E>;

const SMTP_SERVER_ARG: &str = "--smtp-server";
const SMTP_PORT_ARG: &str = "--smtp-port";
const SMTP_LOGIN_ARG: &str = "--smtp-login";
const SMTP_PASSWORD_ARG: &str = "--smtp-password";
const SMTP_TIMEOUT_ARG: &str = "--smtp-timeout";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_TIMEOUT_IN_SECONDS: u64 = 60;

#[derive(Debug, Clone, Getters)]
pub struct SmtpConfiguration {
    server: String,
    port: u16,
    login: String,
    password: String,
    timeout: Duration,
}

impl SmtpConfiguration {
    pub fn new(server: String, port: u16, login: String, password: String, timeout: Duration) -> Self {
        Self {
            server,
            port,
            login,
            password,
            timeout,
        }
    }

    /// Read the configuration from `--smtp-*` args.
    /// Server, port and timeout fall back to their defaults when missing.
    pub fn from_args() -> Result<Self, ConfigurationError> {
        Ok(Self::new(
            retrieve_smtp_server(),
            retrieve_smtp_port()?,
            retrieve_expected_arg_value(SMTP_LOGIN_ARG, MissingSmtpLogin)?,
            retrieve_expected_arg_value(SMTP_PASSWORD_ARG, MissingSmtpPassword)?,
            retrieve_smtp_timeout()?,
        ))
    }
}

/// Deliver messages through an SMTP server, using STARTTLS and credentials.
///
/// A new session is opened for each message. `send` blocks the calling thread,
/// so it must not be called from within an async runtime.
#[derive(Debug)]
pub struct SmtpTransport {
    configuration: SmtpConfiguration,
    runtime: Runtime,
}

impl SmtpTransport {
    pub fn new(configuration: SmtpConfiguration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(log_message_and_return(
                "Couldn't create SMTP runtime",
                CantCreateRuntime,
            ))?;

        Ok(Self {
            configuration,
            runtime,
        })
    }

    /// Convert a composed message into one the SMTP client can deliver.
    pub fn create_message<'a>(&self, message: &'a OutgoingMessage) -> MessageBuilder<'a> {
        let sender = message.sender();
        let recipients: Vec<&str> = message.recipients().iter().map(String::as_str).collect();

        MessageBuilder::new()
            .from((sender.display_name().as_str(), sender.address().as_str()))
            .to(recipients)
            .subject(message.subject().as_str())
            .text_body(message.body().as_str())
    }

    async fn connect_and_send(&self, message: MessageBuilder<'_>) -> Result<()> {
        let configuration = &self.configuration;
        debug!(
            "Connecting to SMTP server {}:{}",
            configuration.server(),
            configuration.port()
        );
        let smtp_client =
            SmtpClientBuilder::new(configuration.server().clone(), *configuration.port())
                .implicit_tls(false)
                .credentials((configuration.login().clone(), configuration.password().clone()))
                .timeout(*configuration.timeout())
                .connect()
                .await;

        smtp_client
            .map_err(log_message_and_return(
                "Couldn't connect to SMTP server",
                CantConnectToSmtpServer,
            ))?
            .send(message)
            .await
            .map_err(log_message_and_return(
                "Couldn't send message",
                CantSendMessage,
            ))
    }
}

impl Transport for SmtpTransport {
    fn send(&self, message: &OutgoingMessage) -> Result<()> {
        let message = self.create_message(message);
        self.runtime.block_on(self.connect_and_send(message))
    }
}

// region Retrieve args
fn retrieve_smtp_server() -> String {
    retrieve_arg_value(SMTP_SERVER_ARG).unwrap_or(DEFAULT_SMTP_SERVER.to_owned())
}

fn retrieve_smtp_port() -> Result<u16, ConfigurationError> {
    retrieve_arg_value(SMTP_PORT_ARG)
        .map(|port| port.parse::<u16>().or(Err(InvalidSmtpPort)))
        .unwrap_or(Ok(DEFAULT_SMTP_PORT))
}

fn retrieve_smtp_timeout() -> Result<Duration, ConfigurationError> {
    retrieve_arg_value(SMTP_TIMEOUT_ARG)
        .map(|timeout| timeout.parse::<u64>().or(Err(InvalidSmtpTimeout)))
        .unwrap_or(Ok(DEFAULT_SMTP_TIMEOUT_IN_SECONDS))
        .map(Duration::from_secs)
}
// endregion
