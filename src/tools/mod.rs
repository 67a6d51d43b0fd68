pub mod env_args;

use log::error;
use std::fmt::Debug;

/// Adapter for `map_err`: logs the underlying error along with a message,
/// then replaces it with `value_to_return`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
