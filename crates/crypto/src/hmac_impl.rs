//! SHA-256 and HMAC-SHA256.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::{CryptoError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Generate a raw HMAC-SHA256 tag.
///
/// # Arguments
/// * `key` - Secret key bytes
/// * `message` - Message to sign
pub fn hmac_sha256_bytes(key: &[u8], message: &[u8]) -> Result<[u8; 32]> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().into())
}

/// Generate HMAC-SHA256 signature.
///
/// # Arguments
/// * `key` - Secret key bytes
/// * `message` - Message to sign
///
/// # Returns
/// Signature as lowercase hex string
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<String> {
    hmac_sha256_bytes(key, message).map(hex::encode)
}

/// Verify a signature against an expected value.
///
/// # Arguments
/// * `signature` - The signature to verify (hex-encoded)
/// * `expected` - The expected signature (hex-encoded)
///
/// # Returns
/// Ok(()) if signatures match, Err otherwise
pub fn verify_signature(signature: &str, expected: &str) -> Result<()> {
    if crate::constant_time_compare(signature.as_bytes(), expected.as_bytes()) {
        Ok(())
    } else {
        Err(CryptoError::SignatureMismatch)
    }
}
