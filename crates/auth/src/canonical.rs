//! Canonical data-check string.
//!
//! Telegram signs `key=value` lines sorted by key and joined with `\n`.
//! The field order and the inclusion rule live in one table so both can be
//! audited in isolation from the string building.

use std::borrow::Cow;

use crate::claim::IdentityClaim;

/// One row of the canonicalization table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalField<'a> {
    /// Field name as it appears in the data-check string
    pub name: &'static str,
    /// Value, or `None` when the field is absent
    pub value: Option<Cow<'a, str>>,
    /// Emit even when empty
    pub always: bool,
}

impl CanonicalField<'_> {
    /// Whether this field contributes a line.
    pub fn is_included(&self) -> bool {
        self.always || self.value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

fn optional<'a>(name: &'static str, value: Option<&'a String>) -> CanonicalField<'a> {
    CanonicalField {
        name,
        value: value.map(|v| Cow::Borrowed(v.as_str())),
        always: false,
    }
}

fn required(name: &'static str, value: i64) -> CanonicalField<'static> {
    CanonicalField {
        name,
        value: Some(Cow::Owned(value.to_string())),
        always: true,
    }
}

/// The ordered field table for `claim`.
///
/// Rows are sorted by name. The signature is never part of the table.
pub fn fields(claim: &IdentityClaim) -> [CanonicalField<'_>; 6] {
    [
        required("auth_date", claim.auth_date),
        optional("first_name", claim.first_name.as_ref()),
        required("id", claim.id),
        optional("last_name", claim.last_name.as_ref()),
        optional("photo_url", claim.photo_url.as_ref()),
        optional("username", claim.username.as_ref()),
    ]
}

/// Build the data-check string for `claim`.
///
/// Values are copied verbatim. Empty optional fields are skipped exactly
/// like absent ones.
pub fn canonicalize(claim: &IdentityClaim) -> String {
    let mut out = String::with_capacity(128);

    for field in fields(claim).iter().filter(|f| f.is_included()) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(field.name);
        out.push('=');
        out.push_str(field.value.as_deref().unwrap_or_default());
    }

    out
}
