//! Error types for claim verification.

use tglogin_crypto::CryptoError;
use thiserror::Error;

/// Result type alias for verification.
pub type Result<T> = std::result::Result<T, AuthError>;

/// The only way a claim can fail verification.
///
/// Forgery, tampering, truncation and internal MAC failures all collapse
/// into this one variant so a caller cannot tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Computed digest does not match the supplied signature
    #[error("invalid telegram credentials")]
    InvalidSignature,
}

impl From<CryptoError> for AuthError {
    fn from(_: CryptoError) -> Self {
        Self::InvalidSignature
    }
}
