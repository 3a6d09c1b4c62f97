//! Client error type shared by the API, session, and validation layers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as one `ClientError` whose `Display` is the bare
//! human-readable message, so page code can hand it straight to a toast.
//! The variant is the coarse kind tag; there are no structured error codes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Coarse classification of a [`ClientError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Http,
    Validation,
    Decode,
    Storage,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A form field failed a local precondition.
    #[error("{0}")]
    Validation(String),
    /// The response body was not JSON or did not match the expected shape.
    #[error("{0}")]
    Decode(String),
    /// Browser storage rejected a write.
    #[error("{0}")]
    Storage(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Http { .. } => ErrorKind::Http,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::Validation(message)
            | Self::Decode(message)
            | Self::Storage(message)
            | Self::Http { message, .. } => message,
        }
    }

    /// HTTP status for server rejections, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
