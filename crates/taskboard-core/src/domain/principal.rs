//! Principal - the authenticated identity (an email address).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated identity.
///
/// The address is trimmed on construction and otherwise stored as given;
/// the identity provider is the authority on whether it exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let principal = Principal::new("  a@x.com \n");
        assert_eq!(principal.as_str(), "a@x.com");
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let principal = Principal::new("a@x.com");
        assert_eq!(serde_json::to_string(&principal).unwrap(), "\"a@x.com\"");
    }
}
