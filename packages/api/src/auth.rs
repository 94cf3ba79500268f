//! # Session controller — login handshake, registration, activation, logout
//!
//! [`Authenticator`] owns the two collaborators a session depends on: the
//! backend [`Client`] (which holds the bearer token for outgoing requests)
//! and the persisted [`SessionStore`]. Both are injected at construction —
//! there is no global singleton — so tests run against an in-memory store
//! and a mock server.
//!
//! The one stateful sequence here is login:
//!
//! 1. exchange credentials for a token;
//! 2. register the token with the client **immediately** — the user fetch
//!    in step 4 requires the bearer header;
//! 3. extract the subject id from the token payload ([`crate::claims`]);
//! 4. fetch the subject's user record;
//! 5. only then commit token + user to the session store.
//!
//! Any failure after step 2 rolls the token back out of the client and
//! clears the store before the error propagates, so a "token but no user"
//! state is never observable.

use store::{SessionStore, SlotStore};

use crate::claims;
use crate::client::Client;
use crate::error::ApiError;
use crate::models::{Credentials, RegisterUser, RegisteredUser, User};

/// Orchestrates the session lifecycle over an injected client and store.
#[derive(Clone, Debug)]
pub struct Authenticator<S: SlotStore + Clone> {
    client: Client,
    session: SessionStore<S>,
}

impl<S: SlotStore + Clone> Authenticator<S> {
    pub fn new(client: Client, session: SessionStore<S>) -> Self {
        Self { client, session }
    }

    /// The underlying backend client, for non-auth requests.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run the login handshake. On success the session store holds both the
    /// token and the fetched user; on failure it holds neither.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token = self.client.login(&credentials).await?;
        if token.is_empty() {
            return Err(ApiError::NoToken);
        }

        // The user fetch below goes out with this bearer token.
        self.client.set_token(&token);

        match self.fetch_subject(&token).await {
            Ok(user) => {
                self.session.set_session(&token, &user);
                Ok(user)
            }
            Err(err) => {
                self.client.clear_token();
                self.session.clear();
                tracing::error!("login rolled back: {err}");
                Err(ApiError::Authentication(Box::new(err)))
            }
        }
    }

    async fn fetch_subject(&self, token: &str) -> Result<User, ApiError> {
        let id = claims::subject(token)?;
        self.client.get_user(id).await
    }

    /// Create an account. The session is deliberately untouched: the account
    /// needs activation before it can log in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, ApiError> {
        let payload = RegisterUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.register(&payload).await
    }

    /// Consume an activation token.
    pub async fn activate(&self, token: &str) -> Result<(), ApiError> {
        self.client.activate(token).await
    }

    /// Clear the session everywhere. Synchronous, no network, cannot fail.
    pub fn logout(&self) {
        self.session.clear();
        self.client.clear_token();
    }

    /// Restore a persisted session, if both slots are readable.
    ///
    /// A token without a readable user is not a session: nothing is
    /// registered with the client and `None` is returned.
    pub fn restore(&self) -> Option<User> {
        let token = self.session.token()?;
        let user: User = self.session.user()?;
        self.client.set_token(&token);
        Some(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use store::MemoryStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ApiConfig;

    fn token_for(sub: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":{sub},"iss":"backend"}}"#));
        format!("{header}.{payload}.signature")
    }

    fn user_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "username": "alice",
            "email": "alice@example.com",
            "created_at": "2024-01-01T00:00:00Z",
            "is_active": true,
            "role": {"id": 1, "name": "user", "level": 1, "description": ""}
        })
    }

    fn authenticator(server: &MockServer) -> (Authenticator<MemoryStore>, MemoryStore) {
        let slots = MemoryStore::new();
        let auth = Authenticator::new(
            Client::new(ApiConfig::new(server.uri())),
            SessionStore::new(slots.clone()),
        );
        (auth, slots)
    }

    async fn mount_login(server: &MockServer, token: &str) {
        Mock::given(method("POST"))
            .and(path("/authentication/token"))
            .respond_with(ResponseTemplate::new(201).set_body_json(token))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_login_commits_token_and_user() {
        let server = MockServer::start().await;
        let token = token_for(42);
        mount_login(&server, &token).await;
        Mock::given(method("GET"))
            .and(path("/users/42"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": user_json(42)})),
            )
            .mount(&server)
            .await;

        let (auth, _slots) = authenticator(&server);
        let user = auth.login("alice@example.com", "pw").await.unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(auth.client().token().as_deref(), Some(token.as_str()));
        assert_eq!(auth.session.token().as_deref(), Some(token.as_str()));
        assert_eq!(auth.session.user::<User>().unwrap().id, 42);
    }

    #[tokio::test]
    async fn test_rejected_credentials_propagate_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/authentication/token"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "invalid credentials"})),
            )
            .mount(&server)
            .await;

        let (auth, slots) = authenticator(&server);
        let err = auth.login("alice@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "invalid credentials");
        assert!(auth.client().token().is_none());
        assert!(slots.get("token").is_none());
    }

    #[tokio::test]
    async fn test_failed_user_fetch_rolls_the_session_back() {
        let server = MockServer::start().await;
        mount_login(&server, &token_for(42)).await;
        Mock::given(method("GET"))
            .and(path("/users/42"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "oops"})),
            )
            .mount(&server)
            .await;

        let (auth, slots) = authenticator(&server);
        let err = auth.login("alice@example.com", "pw").await.unwrap_err();

        assert!(matches!(err, ApiError::Authentication(_)));
        assert!(auth.client().token().is_none());
        assert!(slots.get("token").is_none());
        assert!(slots.get("user").is_none());
    }

    #[tokio::test]
    async fn test_undecodable_token_rolls_the_session_back() {
        let server = MockServer::start().await;
        mount_login(&server, "opaque-not-a-jwt").await;

        let (auth, slots) = authenticator(&server);
        let err = auth.login("alice@example.com", "pw").await.unwrap_err();

        assert!(matches!(err, ApiError::Authentication(_)));
        assert!(auth.client().token().is_none());
        assert!(slots.get("token").is_none());
    }

    #[tokio::test]
    async fn test_empty_token_is_no_token() {
        let server = MockServer::start().await;
        mount_login(&server, "").await;

        let (auth, _slots) = authenticator(&server);
        let err = auth.login("alice@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::NoToken));
        assert!(auth.client().token().is_none());
    }

    #[tokio::test]
    async fn test_register_does_not_authenticate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/authentication/user"))
            .respond_with(ResponseTemplate::new(201).set_body_json(
                serde_json::json!({"data": {"user": user_json(7), "token": "activation-tok"}}),
            ))
            .mount(&server)
            .await;

        let (auth, slots) = authenticator(&server);
        let registered = auth.register("alice", "alice@example.com", "pw").await.unwrap();

        assert_eq!(registered.token, "activation-tok");
        assert_eq!(registered.user.id, 7);
        // No auto-login: nothing was committed anywhere.
        assert!(auth.client().token().is_none());
        assert!(slots.get("token").is_none());
        assert!(slots.get("user").is_none());
    }

    #[tokio::test]
    async fn test_activate_then_login_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/activate/activation-tok"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        mount_login(&server, &token_for(7)).await;
        Mock::given(method("GET"))
            .and(path("/users/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": user_json(7)})),
            )
            .mount(&server)
            .await;

        let (auth, _slots) = authenticator(&server);
        auth.activate("activation-tok").await.unwrap();
        let user = auth.login("alice@example.com", "pw").await.unwrap();

        assert_eq!(user.id, 7);
        assert!(auth.client().token().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let server = MockServer::start().await;
        mount_login(&server, &token_for(42)).await;
        Mock::given(method("GET"))
            .and(path("/users/42"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": user_json(42)})),
            )
            .mount(&server)
            .await;

        let (auth, slots) = authenticator(&server);
        auth.login("alice@example.com", "pw").await.unwrap();

        auth.logout();
        assert!(auth.client().token().is_none());
        assert!(slots.get("token").is_none());
        assert!(slots.get("user").is_none());
    }

    #[tokio::test]
    async fn test_logout_on_empty_session_is_harmless() {
        let server = MockServer::start().await;
        let (auth, _slots) = authenticator(&server);
        auth.logout();
        assert!(auth.client().token().is_none());
    }

    #[tokio::test]
    async fn test_restore_needs_both_slots() {
        let server = MockServer::start().await;

        // Token alone is not a session.
        let slots = MemoryStore::new();
        slots.set("token", "tok-1");
        let auth = Authenticator::new(
            Client::new(ApiConfig::new(server.uri())),
            SessionStore::new(slots),
        );
        assert!(auth.restore().is_none());
        assert!(auth.client().token().is_none());

        // Corrupt user slot is not a session either.
        let slots = MemoryStore::new();
        slots.set("token", "tok-1");
        slots.set("user", "{broken");
        let auth = Authenticator::new(
            Client::new(ApiConfig::new(server.uri())),
            SessionStore::new(slots),
        );
        assert!(auth.restore().is_none());
        assert!(auth.client().token().is_none());
    }

    #[tokio::test]
    async fn test_restore_registers_token_with_client() {
        let server = MockServer::start().await;
        let slots = MemoryStore::new();
        slots.set("token", "tok-1");
        slots.set("user", &user_json(42).to_string());

        let auth = Authenticator::new(
            Client::new(ApiConfig::new(server.uri())),
            SessionStore::new(slots),
        );
        let user = auth.restore().unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(auth.client().token().as_deref(), Some("tok-1"));
    }
}
