//! Errors returned by calls to the remote API and the image feed.
//!
//! Every variant displays as a message that can be shown to the user as-is.

use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// No response arrived (DNS, TLS, CORS, offline, body cut short).
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// A 2xx response whose body does not match the expected schema.
    #[error("Unexpected response from server: {0}")]
    Malformed(String),
}
