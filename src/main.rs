use email_notifier::email::config::EmailConfiguration;
use email_notifier::email::sender::EmailSender;
use email_notifier::error::ConfigurationError::{MissingBody, MissingSubject};
use email_notifier::error::Result;
use email_notifier::tools::env_args::retrieve_expected_arg_value;
use email_notifier::transport::smtp::{SmtpConfiguration, SmtpTransport};
use log::{error, info};
use std::process::ExitCode;

const SUBJECT_ARG: &str = "--subject";
const BODY_ARG: &str = "--body";

fn main() -> ExitCode {
    env_logger::init();

    match send_notification() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Can't send notification, aborting...\n{e:#?}");
            ExitCode::from(2)
        }
    }
}

fn send_notification() -> Result<bool> {
    let subject = retrieve_expected_arg_value(SUBJECT_ARG, MissingSubject)?;
    let body = retrieve_expected_arg_value(BODY_ARG, MissingBody)?;
    let email_configuration = EmailConfiguration::from_args()?;
    let smtp_configuration = SmtpConfiguration::from_args()?;
    let transport = SmtpTransport::new(smtp_configuration)?;

    let sender = EmailSender::new(email_configuration, transport);
    if !sender.has_recipients() {
        info!("No valid recipient, nothing to send");
        return Ok(false);
    }

    Ok(sender.send_email(&subject, &body))
}
