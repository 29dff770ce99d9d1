//! Session state machine.

use super::principal::Principal;

/// Client-side session state.
///
/// State transitions:
/// - Unknown -> Authenticated(p) | Unauthenticated (first gateway notification)
/// - Authenticated(p) -> Unauthenticated (sign-out, session expiry)
/// - Unauthenticated -> Authenticated(p) (sign-in)
///
/// Design note: `Unknown` exists so "we have not heard from the gateway yet"
/// is distinguishable from a confirmed signed-out session; protected views
/// show a loading state for the former and redirect on the latter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Before the first auth-state notification.
    #[default]
    Unknown,

    /// Signed in as the given principal.
    Authenticated(Principal),

    /// Confirmed signed out (or never signed in).
    Unauthenticated,
}

impl SessionState {
    /// The current principal, if any.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SessionState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}
