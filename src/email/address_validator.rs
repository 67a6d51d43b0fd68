use crate::email::address_validator::AddressValidatorError::InvalidPattern;
use crate::tools::log_message_and_return;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

type Result<T, E = AddressValidatorError> = std::result::Result<T, E>;

/// Syntax of a valid email address, as accepted by HTML forms.
/// Local part and domain are restricted to ASCII.
const DEFAULT_ADDRESS_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static DEFAULT_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_ADDRESS_PATTERN).unwrap());

/// Decides whether a raw string is a well-formed email address.
///
/// Implementations must be side-effect free: an unrecognized input is simply not valid.
pub trait AddressValidator {
    fn is_valid(&self, candidate: &str) -> bool;

    /// Keep only valid candidates, in their original order.
    fn filter_valid<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<String> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|candidate| self.is_valid(candidate))
            .map(str::to_owned)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct RegexAddressValidator {
    regex: Regex,
}

impl RegexAddressValidator {
    /// Build a validator from a custom pattern, for stricter or looser rules than the default one.
    /// The pattern should be anchored, otherwise partial matches are accepted.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(log_message_and_return(
            "Invalid email address pattern",
            InvalidPattern,
        ))?;

        Ok(Self { regex })
    }
}

impl Default for RegexAddressValidator {
    fn default() -> Self {
        Self {
            regex: DEFAULT_ADDRESS_REGEX.clone(),
        }
    }
}

impl AddressValidator for RegexAddressValidator {
    fn is_valid(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum AddressValidatorError {
    #[error("Email address pattern can't be compiled")]
    InvalidPattern,
}
