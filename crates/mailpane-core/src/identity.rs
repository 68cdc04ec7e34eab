//! User identity supplied by the session.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, as supplied by the session bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Email address.
    pub address: String,
    /// Name shown in the sender field of composed mail.
    pub display_name: String,
}

impl UserIdentity {
    /// Creates a new identity.
    #[must_use]
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: display_name.into(),
        }
    }

    /// Fallback identity used when composing while signed out.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("me@mailpane.local", "Me")
    }
}
