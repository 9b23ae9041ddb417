//! Error types for wizard operations.

use thiserror::Error;

/// Failure modes of a wizard operation.
///
/// `Guard` failures are detected locally and never reach the network;
/// `Backend` and `Transport` failures come back from an issued request.
/// None of them are fatal: the user corrects input and re-triggers the
/// same action.
#[derive(Debug, Error)]
pub enum GenieError {
    /// A required input or prior step is missing.
    #[error("{0}")]
    Guard(String),

    /// The backend answered with `success: false`.
    #[error("{0}")]
    Backend(String),

    /// The request failed in transit or the response was not valid JSON.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl GenieError {
    pub fn guard(msg: impl Into<String>) -> Self {
        GenieError::Guard(msg.into())
    }
}
