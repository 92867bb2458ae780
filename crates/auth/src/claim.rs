//! The identity claim delivered by a Telegram login callback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User fields asserted by Telegram, plus the signature covering them.
///
/// Built fresh from untrusted input for every login attempt. Decoding the
/// callback payload is left to the host; with serde the signature is read
/// from the provider's `hash` field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// Telegram user id
    pub id: i64,
    /// First name, if shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name, if shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Username, if the user has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Profile photo URL, if shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Unix time at which Telegram issued the claim
    pub auth_date: i64,
    /// Hex HMAC-SHA256 over the other fields
    #[serde(rename = "hash")]
    pub signature: String,
}

impl IdentityClaim {
    /// Create a claim with only the required fields set.
    pub fn new(id: i64, auth_date: i64, signature: impl Into<String>) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            username: None,
            photo_url: None,
            auth_date,
            signature: signature.into(),
        }
    }

    /// Set the first name
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the username
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the photo URL
    #[must_use]
    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }
}

impl fmt::Debug for IdentityClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityClaim")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("photo_url", &self.photo_url)
            .field("auth_date", &self.auth_date)
            .field("signature", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_telegram_payload() {
        let json = r#"{
            "id": 12345,
            "first_name": "Ann",
            "username": "ann_k",
            "photo_url": "https://t.me/i/userpic/320/ann.jpg",
            "auth_date": 1700000000,
            "hash": "deadbeef"
        }"#;
        let claim: IdentityClaim = serde_json::from_str(json).unwrap();

        assert_eq!(claim.id, 12345);
        assert_eq!(claim.first_name.as_deref(), Some("Ann"));
        assert_eq!(claim.last_name, None);
        assert_eq!(claim.username.as_deref(), Some("ann_k"));
        assert_eq!(claim.auth_date, 1_700_000_000);
        assert_eq!(claim.signature, "deadbeef");
    }

    #[test]
    fn test_deserialize_requires_hash() {
        let json = r#"{"id": 1, "auth_date": 2}"#;
        assert!(serde_json::from_str::<IdentityClaim>(json).is_err());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let claim = IdentityClaim::new(7, 8, "ab");
        let value = serde_json::to_value(&claim).unwrap();

        assert_eq!(value, serde_json::json!({"id": 7, "auth_date": 8, "hash": "ab"}));
    }

    #[test]
    fn test_builder() {
        let claim = IdentityClaim::new(1, 2, "sig")
            .with_first_name("A")
            .with_last_name("B")
            .with_username("c")
            .with_photo_url("d");

        assert_eq!(claim.first_name.as_deref(), Some("A"));
        assert_eq!(claim.last_name.as_deref(), Some("B"));
        assert_eq!(claim.username.as_deref(), Some("c"));
        assert_eq!(claim.photo_url.as_deref(), Some("d"));
    }

    #[test]
    fn test_debug_redacts_signature() {
        let claim = IdentityClaim::new(1, 2, "0123456789abcdef");
        let debug = format!("{claim:?}");

        assert!(!debug.contains("0123456789abcdef"));
        assert!(debug.contains("<redacted>"));
    }
}
