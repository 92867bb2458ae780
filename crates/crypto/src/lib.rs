//! Cryptographic primitives for Telegram login verification.
//!
//! This crate provides:
//! - SHA-256 digests (used to turn a bot token into a signing key)
//! - HMAC-SHA256 signature generation
//! - Constant-time comparison for security

#![warn(missing_docs)]

mod hmac_impl;
mod timing;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use hmac_impl::{hmac_sha256, hmac_sha256_bytes, sha256, verify_signature};
pub use timing::constant_time_compare;
pub use error::{CryptoError, Result};
