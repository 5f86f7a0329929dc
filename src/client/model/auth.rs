use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::auth::UserDto};

/// Session state shared through context by the layouts and the login page.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    pub fn sign_out(&mut self) {
        self.inner.set(AuthState::NotLoggedIn);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Stored token not checked yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
    /// The user lookup failed for a reason other than a rejected token
    Error(ApiError),
}

impl AuthState {
    /// Maps the answer of the current-user lookup; a rejected token just means logged out.
    pub fn from_lookup(result: Result<UserDto, ApiError>) -> Self {
        match result {
            Ok(user) => AuthState::Authenticated(user),
            Err(e) if e.is_unauthorized() => AuthState::NotLoggedIn,
            Err(e) => AuthState::Error(e),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserDto {
        UserDto {
            id: 1,
            username: "admin".to_string(),
            admin: true,
        }
    }

    #[test]
    fn lookup_maps_rejected_token_to_logged_out() {
        let state = AuthState::from_lookup(Err(ApiError {
            status: 401,
            message: "Session expired".to_string(),
        }));
        assert_eq!(state, AuthState::NotLoggedIn);
    }

    #[test]
    fn lookup_keeps_other_failures() {
        let error = ApiError {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(
            AuthState::from_lookup(Err(error.clone())),
            AuthState::Error(error)
        );
    }

    #[test]
    fn lookup_success_authenticates() {
        let state = AuthState::from_lookup(Ok(user()));
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("admin"));
    }
}
