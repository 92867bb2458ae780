//! Signature verification for identity claims.

use std::fmt;

use tglogin_crypto::{hmac_sha256, sha256, verify_signature};
use tracing::debug;

use crate::canonical::canonicalize;
use crate::claim::IdentityClaim;
use crate::error::{AuthError, Result};

/// Derive the HMAC key Telegram uses for login widget signatures.
///
/// The key is the SHA-256 digest of the raw bot token.
pub fn derive_secret_key(bot_token: &[u8]) -> [u8; 32] {
    sha256(bot_token)
}

/// Checks identity claims against a single bot token.
///
/// Only the derived key is kept. A `Verifier` is immutable once built and
/// can be shared freely between threads.
#[derive(Clone)]
pub struct Verifier {
    key: [u8; 32],
}

impl Verifier {
    /// Create a verifier for `bot_token`.
    pub fn new(bot_token: impl AsRef<[u8]>) -> Self {
        Self::from_secret_key(derive_secret_key(bot_token.as_ref()))
    }

    /// Create a verifier from an already derived key.
    pub fn from_secret_key(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Compute the hex signature Telegram would attach to `claim`.
    ///
    /// The claim's own signature is ignored.
    pub fn sign(&self, claim: &IdentityClaim) -> Result<String> {
        let data_check = canonicalize(claim);
        Ok(hmac_sha256(&self.key, data_check.as_bytes())?)
    }

    /// Verify that `claim` was signed by Telegram for this bot.
    ///
    /// Any mismatch, including a truncated or oversized signature, yields
    /// [`AuthError::InvalidSignature`]. The comparison runs in constant time.
    pub fn verify(&self, claim: &IdentityClaim) -> Result<()> {
        let expected = self.sign(claim)?;

        match verify_signature(&claim.signature, &expected) {
            Ok(()) => {
                debug!(user_id = claim.id, "telegram login verified");
                Ok(())
            }
            Err(_) => {
                debug!(user_id = claim.id, "telegram login rejected");
                Err(AuthError::InvalidSignature)
            }
        }
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier").field("key", &"<redacted>").finish()
    }
}

/// Compute the expected signature for `claim` under `bot_token`.
pub fn expected_signature(claim: &IdentityClaim, bot_token: &[u8]) -> Result<String> {
    Verifier::new(bot_token).sign(claim)
}

/// Verify `claim` against `bot_token`.
pub fn verify(claim: &IdentityClaim, bot_token: &[u8]) -> Result<()> {
    Verifier::new(bot_token).verify(claim)
}
