//! Generic error surface for page code: log, then toast.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use crate::error::ClientError;
use crate::util::toast::{ToastKind, show_notification};

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Message shown for `err`: the caller's override, else the error's own
/// message, else a generic fallback.
pub fn error_toast_message(err: &ClientError, custom_message: Option<&str>) -> String {
    custom_message
        .filter(|m| !m.is_empty())
        .or_else(|| Some(err.message()).filter(|m| !m.is_empty()))
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_owned()
}

pub fn handle_error(err: &ClientError, custom_message: Option<&str>) {
    leptos::logging::error!("Error: {err}");
    show_notification(&error_toast_message(err, custom_message), ToastKind::Error);
}
