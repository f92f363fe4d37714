//! Credential gate.
//!
//! The user types the API key into a masked field; [`CredentialGate`] keeps it
//! for the rest of the session.  Any non-empty string is accepted as-is; the
//! remote service is the only judge of validity.

use std::fmt;

// ---------------------------------------------------------------------------
// Credential
// ---------------------------------------------------------------------------

/// A non-empty API secret.  `Debug` and `Display` never reveal the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap `secret` verbatim, returning `None` only when it is empty.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// The raw secret, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

// ---------------------------------------------------------------------------
// CredentialGate
// ---------------------------------------------------------------------------

/// Holds the session credential and answers whether the tool is unlocked.
#[derive(Debug, Default, Clone)]
pub struct CredentialGate {
    credential: Option<Credential>,
}

impl CredentialGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held credential.  An empty string locks the gate again.
    pub fn set(&mut self, secret: &str) {
        self.credential = Credential::new(secret);
        log::debug!("credential gate: unlocked = {}", self.is_unlocked());
    }

    pub fn is_unlocked(&self) -> bool {
        self.credential.is_some()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_rejected() {
        assert!(Credential::new("").is_none());
    }

    #[test]
    fn whitespace_secret_is_accepted() {
        let cred = Credential::new("   ").unwrap();
        assert_eq!(cred.expose(), "   ");

        let mut gate = CredentialGate::new();
        gate.set(" ");
        assert!(gate.is_unlocked());
    }

    #[test]
    fn secret_is_kept_verbatim() {
        let cred = Credential::new("sk-abc ").unwrap();
        assert_eq!(cred.expose(), "sk-abc ");
    }

    #[test]
    fn debug_output_is_redacted() {
        let cred = Credential::new("sk-very-secret").unwrap();
        let shown = format!("{cred:?}");
        assert!(!shown.contains("sk-very-secret"));

        let mut gate = CredentialGate::new();
        gate.set("sk-very-secret");
        assert!(!format!("{gate:?}").contains("sk-very-secret"));
    }

    #[test]
    fn gate_starts_locked() {
        let gate = CredentialGate::new();
        assert!(!gate.is_unlocked());
        assert!(gate.credential().is_none());
    }

    #[test]
    fn gate_unlocks_and_relocks() {
        let mut gate = CredentialGate::new();
        gate.set("sk-test");
        assert!(gate.is_unlocked());
        assert_eq!(gate.credential().map(Credential::expose), Some("sk-test"));

        gate.set("");
        assert!(!gate.is_unlocked());
    }
}
