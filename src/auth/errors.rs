use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing x-api-key header")]
    MissingKey,

    #[error("x-api-key does not match")]
    InvalidKey,

    #[error("no proxy API key configured")]
    NotConfigured,
}
