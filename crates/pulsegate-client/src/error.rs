use std::fmt;

/// Error type for client session operations.
#[derive(Debug)]
pub enum SessionError {
    /// The server rejected the submitted credential pair (401 at login).
    InvalidCredentials,

    /// The server rejected the request shape (400 at login).
    BadRequest(String),

    /// A protected request was rejected (401/403); the session has been
    /// invalidated and the stored token cleared.
    Unauthenticated,

    /// A login attempt is already in flight.
    LoginInFlight,

    /// Transport-level failure (connection refused, timeout, bad body).
    Transport(reqwest::Error),

    /// The server answered with an unexpected status code.
    Server { status: u16, message: String },

    /// Reading or writing the durable token store failed.
    Store(std::io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid credentials"),
            Self::BadRequest(message) => write!(f, "{}", message),
            Self::Unauthenticated => {
                write!(f, "Authentication failed. Please log in again.")
            }
            Self::LoginInFlight => write!(f, "A login attempt is already in progress"),
            Self::Transport(e) => write!(f, "Request failed: {}", e),
            Self::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            Self::Store(e) => write!(f, "Token store error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<reqwest::Error> for SessionError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Store(e)
    }
}
