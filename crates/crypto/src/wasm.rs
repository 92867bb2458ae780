//! WASM bindings for login verification.

use wasm_bindgen::prelude::*;

/// Compute the hex signature Telegram attaches to a data-check string.
///
/// The signing key is SHA-256 of the bot token. Returns an empty string
/// if the MAC cannot be constructed.
#[wasm_bindgen]
pub fn data_check_hash(bot_token: &str, data_check_string: &str) -> String {
    let key = crate::sha256(bot_token.as_bytes());
    crate::hmac_sha256(&key, data_check_string.as_bytes()).unwrap_or_default()
}

/// Verify a login widget signature (constant-time comparison).
///
/// # Arguments
/// * `bot_token` - The bot token shared with Telegram
/// * `data_check_string` - The canonical newline-joined field string
/// * `signature_hex` - The `hash` field sent by Telegram
///
/// # Returns
/// true if signature matches, false otherwise
#[wasm_bindgen]
pub fn verify_login_hex(bot_token: &str, data_check_string: &str, signature_hex: &str) -> bool {
    let expected = data_check_hash(bot_token, data_check_string);
    !expected.is_empty()
        && crate::constant_time_compare(expected.as_bytes(), signature_hex.as_bytes())
}

/// Constant-time comparison of two strings.
#[wasm_bindgen]
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    crate::constant_time_compare(a.as_bytes(), b.as_bytes())
}
