//! Session Context
//!
//! Bearer token holder passed explicitly to the API client.
//! Cloning shares the same session.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    expired: bool,
    on_expired: Vec<Rc<dyn Fn()>>,
}

#[derive(Clone, Default)]
pub struct Session {
    inner: Rc<RefCell<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.sign_in(token);
        session
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.borrow().token.is_some()
    }

    pub fn is_expired(&self) -> bool {
        self.inner.borrow().expired
    }

    /// `Authorization` header value, if a token is held
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    pub fn sign_in(&self, token: impl Into<String>) {
        let mut state = self.inner.borrow_mut();
        state.token = Some(token.into());
        state.expired = false;
    }

    pub fn sign_out(&self) {
        self.inner.borrow_mut().token = None;
    }

    /// Drop the token after a 401 and notify listeners once per expiry.
    /// A 401 without a token (a failed login) is not an expiry.
    pub fn expire(&self) {
        let listeners = {
            let mut state = self.inner.borrow_mut();
            if state.expired || state.token.is_none() {
                return;
            }
            state.expired = true;
            state.token = None;
            state.on_expired.clone()
        };
        tracing::info!("session expired");
        for listener in listeners {
            listener();
        }
    }

    pub fn on_expired(&self, listener: impl Fn() + 'static) {
        self.inner.borrow_mut().on_expired.push(Rc::new(listener));
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Session")
            .field("signed_in", &state.token.is_some())
            .field("expired", &state.expired)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_authorization_header() {
        let session = Session::new();
        assert_eq!(session.authorization(), None);
        session.sign_in("abc");
        assert_eq!(session.authorization().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_expire_notifies_once() {
        let session = Session::with_token("abc");
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        session.on_expired(move || seen.set(seen.get() + 1));

        let shared = session.clone();
        shared.expire();
        shared.expire();

        assert_eq!(calls.get(), 1);
        assert!(session.is_expired());
        assert!(!session.is_signed_in());

        session.sign_in("fresh");
        assert!(!session.is_expired());
    }

    #[test]
    fn test_unauthenticated_401_is_not_expiry() {
        let session = Session::new();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        session.on_expired(move || seen.set(seen.get() + 1));

        session.expire();

        assert_eq!(calls.get(), 0);
        assert!(!session.is_expired());
    }
}
