use thiserror::Error;

/// Error type for JWT operations.
///
/// The verification variants are kept distinct for diagnostics; callers at a
/// trust boundary are expected to collapse them into one response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
