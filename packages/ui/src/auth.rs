//! Authentication context and hooks for the UI.

use api::{ApiConfig, ApiError, Authenticator, Client, RegisteredUser, User};
use dioxus::prelude::*;

use crate::platform::{platform_session, PlatformSlots};

/// Authentication state for the application.
///
/// `loading` is true from first render until the persisted session has been
/// restored (or found absent); the route guard shows a placeholder for that
/// window instead of redirecting.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Authenticated iff both the token and the user are present. Never
    /// stored — always derived, so no intermediate state is observable.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Handle to the session controller and its reactive state. Cloneable;
/// clones share the token, the store, and the state signal.
#[derive(Clone)]
pub struct Auth {
    authenticator: Authenticator<PlatformSlots>,
    state: Signal<AuthState>,
}

impl Auth {
    /// The reactive authentication state.
    pub fn state(&self) -> Signal<AuthState> {
        self.state
    }

    /// The backend client, for pages issuing non-auth requests.
    pub fn client(&self) -> Client {
        self.authenticator.client().clone()
    }

    /// Run the login handshake and commit the result to the state signal.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let user = self.authenticator.login(email, password).await?;
        let token = self.authenticator.client().token();
        let mut state = self.state;
        state.set(AuthState {
            user: Some(user),
            token,
            loading: false,
        });
        Ok(())
    }

    /// Create an account. Leaves the session untouched: the account needs
    /// activation before it can log in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, ApiError> {
        self.authenticator.register(username, email, password).await
    }

    /// Consume an activation token.
    pub async fn activate(&self, token: &str) -> Result<(), ApiError> {
        self.authenticator.activate(token).await
    }

    /// Clear the session everywhere and flip the state to logged out.
    pub fn logout(&self) {
        self.authenticator.logout();
        let mut state = self.state;
        state.set(AuthState {
            user: None,
            token: None,
            loading: false,
        });
    }
}

/// Get the current authentication handle.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let state = use_signal(AuthState::default);
    let auth = use_context_provider(|| Auth {
        authenticator: Authenticator::new(Client::new(ApiConfig::default()), platform_session()),
        state,
    });

    // Restore the persisted session on mount.
    let _ = use_resource(move || {
        let auth = auth.clone();
        async move {
            let user = auth.authenticator.restore();
            let token = auth.authenticator.client().token();
            if let Some(user) = &user {
                tracing::debug!("restored session for user {}", user.id);
            }
            let mut state = auth.state;
            state.set(AuthState {
                user,
                token,
                loading: false,
            });
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    fn user() -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_active: true,
            role: Role {
                id: 1,
                name: "user".to_string(),
                level: 1,
                description: String::new(),
            },
        }
    }

    #[test]
    fn test_default_state_is_loading_and_unauthenticated() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_authenticated_requires_token_and_user() {
        let mut state = AuthState {
            user: None,
            token: None,
            loading: false,
        };
        assert!(!state.is_authenticated());

        state.token = Some("tok".to_string());
        assert!(!state.is_authenticated());

        state.token = None;
        state.user = Some(user());
        assert!(!state.is_authenticated());

        state.token = Some("tok".to_string());
        assert!(state.is_authenticated());
    }
}
