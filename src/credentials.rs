//! In-memory holder for the completion service API key.
//!
//! The key lives only for the lifetime of the process. It is never written to
//! disk, never exported into the process environment and never rendered by
//! `Debug`.

use secrecy::{ExposeSecret, SecretString};

#[derive(Clone, Default)]
pub struct CredentialHolder {
    secret: Option<SecretString>,
}

impl CredentialHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored key. Blank input clears the holder.
    pub fn set(&mut self, value: &str) {
        self.secret = if value.trim().is_empty() {
            None
        } else {
            Some(SecretString::new(value.to_string()))
        };
    }

    pub fn get(&self) -> Option<&SecretString> {
        self.secret.as_ref()
    }

    /// Append typed or pasted text to the key.
    pub fn push_str(&mut self, text: &str) {
        let mut value = self.current();
        value.push_str(text);
        self.set(&value);
    }

    /// Remove the last character of the key.
    pub fn pop_char(&mut self) {
        let mut value = self.current();
        value.pop();
        self.set(&value);
    }

    pub fn clear(&mut self) {
        self.secret = None;
    }

    pub fn is_present(&self) -> bool {
        self.secret.is_some()
    }

    /// Number of characters in the key, for masked rendering.
    pub fn masked_len(&self) -> usize {
        self.secret
            .as_ref()
            .map(|s| s.expose_secret().chars().count())
            .unwrap_or(0)
    }

    fn current(&self) -> String {
        self.secret
            .as_ref()
            .map(|s| s.expose_secret().to_string())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for CredentialHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.secret.is_some() {
            write!(f, "CredentialHolder(<redacted>)")
        } else {
            write!(f, "CredentialHolder(<empty>)")
        }
    }
}
