//! Verification of Telegram Login Widget identity claims.
//!
//! Telegram signs the user fields it hands to a login callback with a key
//! derived from the bot token. This crate rebuilds the canonical
//! data-check string from a claim and checks the signature against it:
//!
//! - **Claim**: the inbound field set ([`IdentityClaim`])
//! - **Canonicalization**: ordered `key=value` lines ([`canonicalize`])
//! - **Verification**: HMAC-SHA256 with a constant-time compare ([`Verifier`])
//!
//! # Example
//!
//! ```rust
//! use tglogin_auth::{IdentityClaim, Verifier};
//!
//! let verifier = Verifier::new("bot-token-1");
//! let mut claim = IdentityClaim::new(12345, 1_700_000_000, String::new())
//!     .with_first_name("Ann");
//! claim.signature = verifier.sign(&claim).unwrap();
//!
//! assert!(verifier.verify(&claim).is_ok());
//! ```
//!
//! `auth_date` is not checked for freshness. Hosts that need a replay
//! window must enforce it themselves after a successful verification.

#![warn(missing_docs)]

pub mod canonical;
pub mod claim;
pub mod error;
pub mod verifier;

pub use canonical::{canonicalize, CanonicalField};
pub use claim::IdentityClaim;
pub use error::{AuthError, Result};
pub use verifier::{derive_secret_key, expected_signature, verify, Verifier};
