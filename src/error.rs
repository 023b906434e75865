// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Session(SessionError),
}

/// Specific error types for photo session loading issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Share link has no recognizable person segment
    InvalidLink,

    /// Service could not be reached (connection refused, DNS, TLS)
    Unreachable(String),

    /// Request timed out
    Timeout,

    /// Service knows nothing about this person or trip
    NotFound,

    /// Service answered with another non-success HTTP status
    Status(u16),

    /// Response body was not the expected JSON shape
    MalformedResponse(String),

    /// Generic error with raw message
    Other(String),
}

impl SessionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SessionError::InvalidLink => "error-link-invalid",
            SessionError::Unreachable(_) => "error-session-unreachable",
            SessionError::Timeout => "error-session-timeout",
            SessionError::NotFound => "error-session-not-found",
            SessionError::Status(_) => "error-session-status",
            SessionError::MalformedResponse(_) => "error-session-malformed",
            SessionError::Other(_) => "error-session-general",
        }
    }

    /// Categorizes a transport error from the HTTP client.
    ///
    /// Status-code errors are handled at the call site (the client is not
    /// configured with `error_for_status`), so this only needs to sort out
    /// transport-level failures.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return SessionError::Timeout;
        }
        if err.is_connect() {
            return SessionError::Unreachable(err.to_string());
        }
        if err.is_decode() {
            return SessionError::MalformedResponse(err.to_string());
        }
        SessionError::Other(err.to_string())
    }

    /// Maps a non-success HTTP status to the matching error.
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            SessionError::NotFound
        } else {
            SessionError::Status(status)
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidLink => write!(f, "Share link is not valid"),
            SessionError::Unreachable(msg) => write!(f, "Service unreachable: {}", msg),
            SessionError::Timeout => write!(f, "Request timed out"),
            SessionError::NotFound => write!(f, "Photos not found"),
            SessionError::Status(code) => write!(f, "Service answered HTTP {}", code),
            SessionError::MalformedResponse(msg) => {
                write!(f, "Unexpected response: {}", msg)
            }
            SessionError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Session(e) => write!(f, "Session Error: {}", e),
        }
    }
}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Error::Session(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
