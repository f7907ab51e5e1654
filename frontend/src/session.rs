//! Session store: the authenticated identity plus a startup loading flag.
//!
//! The state itself is owned by the root `App` component and handed down
//! the tree as a [`SessionHandle`] context, so there is no ambient global;
//! screens read `state` and mutate through `dispatch`. The handle's
//! `PartialEq` compares only the state, which is what makes context
//! consumers re-render exactly when the session changes.

use std::rc::Rc;

use yew::prelude::*;

use crate::services::documents::Documents;

/// What the identity provider reported at sign-in. The token authenticates
/// document-store calls for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub id_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl SessionState {
    /// Process-start state: loading until the provider has reported the
    /// restored session or its absence.
    pub fn starting() -> Self {
        SessionState {
            identity: None,
            loading: true,
            last_error: None,
        }
    }

    /// Pure reducer; the root component swaps its state for the result.
    pub fn apply(&self, action: SessionAction) -> SessionState {
        let mut next = self.clone();
        match action {
            SessionAction::SetIdentity(identity) => {
                next.identity = Some(identity);
                next.loading = false;
                next.last_error = None;
            }
            SessionAction::SetLoading(loading) => next.loading = loading,
            SessionAction::SetError(message) => next.last_error = Some(message),
            SessionAction::Clear => {
                next.identity = None;
                next.loading = false;
            }
        }
        next
    }
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Establish the session; clears the loading flag.
    SetIdentity(Identity),
    SetLoading(bool),
    SetError(String),
    /// Sign-out. The identity is dropped; the route guard does the rest.
    Clear,
}

#[derive(Clone)]
pub struct SessionHandle {
    pub state: Rc<SessionState>,
    pub dispatch: Callback<SessionAction>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl SessionHandle {
    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Document-gateway client carrying this session's token (anonymous
    /// when no session is established).
    pub fn docs(&self) -> Documents {
        match self.identity() {
            Some(identity) => Documents::with_token(&identity.id_token),
            None => Documents::new(),
        }
    }

    pub fn sign_out(&self) {
        self.dispatch.emit(SessionAction::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            uid: "uid-1".to_string(),
            email: "a@x.com".to_string(),
            display_name: "A".to_string(),
            id_token: "tok".to_string(),
        }
    }

    #[test]
    fn starts_loading_with_no_identity() {
        let state = SessionState::starting();
        assert!(state.loading);
        assert!(state.identity.is_none());
    }

    #[test]
    fn set_identity_clears_loading_and_error() {
        let state = SessionState::starting()
            .apply(SessionAction::SetError("boom".to_string()))
            .apply(SessionAction::SetIdentity(identity()));
        assert!(!state.loading);
        assert!(state.last_error.is_none());
        assert_eq!(state.identity.unwrap().uid, "uid-1");
    }

    #[test]
    fn clear_drops_the_identity() {
        let state = SessionState::starting()
            .apply(SessionAction::SetIdentity(identity()))
            .apply(SessionAction::Clear);
        assert!(state.identity.is_none());
        assert!(!state.loading);
    }
}
