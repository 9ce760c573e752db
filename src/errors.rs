use astra::Response;
// errors.rs
use std::fmt;

use crate::domain::comparison::InvalidComparisonError;
use crate::domain::selection::SelectionFullError;

/// Errors originating from the server logic (routing, bad parameters),
/// the comparison domain, or the remote Property API.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// Both sides of a comparison resolved to the same address.
    InvalidComparison(String),
    /// Toggle on a selection that already holds two properties.
    SelectionFull,
    /// The remote Property API could not be reached or answered with an error.
    RemoteUnavailable(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InvalidComparison(addr) => {
                write!(f, "Cannot compare a property to itself: {addr}")
            }
            ServerError::SelectionFull => {
                write!(f, "You can only compare 2 properties at a time")
            }
            ServerError::RemoteUnavailable(msg) => {
                write!(f, "Property API unavailable: {msg}")
            }
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<InvalidComparisonError> for ServerError {
    fn from(err: InvalidComparisonError) -> Self {
        ServerError::InvalidComparison(err.address)
    }
}

impl From<SelectionFullError> for ServerError {
    fn from(_: SelectionFullError) -> Self {
        ServerError::SelectionFull
    }
}
