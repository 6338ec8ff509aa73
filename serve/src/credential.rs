//! Server-held model API credential.
//!
//! The key never leaves the process except in the `x-api-key` header of the upstream call:
//! [`ApiKey`] redacts itself in `Debug`/`Display` and has no serde impls.

use std::fmt;

/// Env var that holds the credential unless `PITCH_API_KEY_VAR` names another one.
pub const DEFAULT_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trims surrounding whitespace; `None` when nothing is left.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Where the proxy finds its credential.
///
/// `Env` is read on every request so a key exported after start-up is picked up, and a
/// removed key yields "API key not configured" rather than a stale value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    Env(String),
    Fixed(ApiKey),
    Missing,
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self::Env(DEFAULT_API_KEY_VAR.to_string())
    }
}

impl CredentialSource {
    pub fn resolve(&self) -> Option<ApiKey> {
        match self {
            Self::Env(var) => std::env::var(var).ok().and_then(ApiKey::new),
            Self::Fixed(key) => Some(key.clone()),
            Self::Missing => None,
        }
    }
}
