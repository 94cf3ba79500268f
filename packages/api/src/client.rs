//! # HTTP client for the posting service backend
//!
//! One method per backend endpoint, all sharing the same request plumbing:
//!
//! - request bodies are serialized as JSON with a JSON content type;
//! - the bearer token, when held, rides along as an `Authorization` header;
//! - non-success responses are interpreted by a single function with a fixed
//!   priority order (see [`crate::error`]) and always raise an [`ApiError`];
//! - success responses are parsed according to the endpoint's **declared**
//!   [`ResponseShape`] — most payloads arrive wrapped in a `{"data": ...}`
//!   envelope, while login's token comes bare. Declaring the shape per
//!   endpoint (instead of sniffing for a `data` field at runtime) means a
//!   bare payload that happens to contain a field named `data` cannot be
//!   misinterpreted.
//!
//! The client performs no retries, enforces no timeouts, and caches nothing;
//! the transport's defaults apply and every fetch is fresh.

use std::sync::{Arc, Mutex};

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{interpret_failure, ApiError};
use crate::models::{
    Credentials, FeedQuery, NewPost, Post, PostWithMetadata, RegisterUser, RegisteredUser,
    UpdatePost, User,
};

/// How a successful response body is laid out.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ResponseShape {
    /// `{"data": T}` — the backend's envelope for object payloads.
    Enveloped,
    /// `T` directly, no envelope.
    Bare,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Backend client. Cheap to clone; clones share the held token.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
}

impl Client {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Register the bearer token used for subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    /// Drop the held bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.token.lock().unwrap() = None;
    }

    /// The currently held bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a request expecting a payload, parsed per the declared shape.
    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        shape: ResponseShape,
    ) -> Result<T, ApiError> {
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(interpret_failure(status.as_u16(), &body));
        }

        let body = response.text().await?;
        let value = match shape {
            ResponseShape::Enveloped => serde_json::from_str::<Envelope<T>>(&body)?.data,
            ResponseShape::Bare => serde_json::from_str(&body)?,
        };
        Ok(value)
    }

    /// Send a request whose success carries no payload (204 or empty body).
    async fn send_no_content(&self, req: RequestBuilder) -> Result<(), ApiError> {
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(interpret_failure(status.as_u16(), &body));
        }
        Ok(())
    }

    // Authentication

    pub async fn register(&self, payload: &RegisterUser) -> Result<RegisteredUser, ApiError> {
        self.send(
            self.request(Method::POST, "/authentication/user").json(payload),
            ResponseShape::Enveloped,
        )
        .await
    }

    /// Exchange credentials for a bearer token. The token arrives bare.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.send(
            self.request(Method::POST, "/authentication/token")
                .json(credentials),
            ResponseShape::Bare,
        )
        .await
    }

    /// Consume an activation token. Idempotency is the backend's business;
    /// any success status counts as activated.
    pub async fn activate(&self, token: &str) -> Result<(), ApiError> {
        self.send_no_content(self.request(Method::PUT, &format!("/users/activate/{token}")))
            .await
    }

    // Posts

    pub async fn create_post(&self, payload: &NewPost) -> Result<Post, ApiError> {
        self.send(
            self.request(Method::POST, "/posts").json(payload),
            ResponseShape::Enveloped,
        )
        .await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.send(
            self.request(Method::GET, &format!("/posts/{id}")),
            ResponseShape::Enveloped,
        )
        .await
    }

    pub async fn update_post(&self, id: i64, patch: &UpdatePost) -> Result<Post, ApiError> {
        self.send(
            self.request(Method::PATCH, &format!("/posts/{id}")).json(patch),
            ResponseShape::Enveloped,
        )
        .await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.send_no_content(self.request(Method::DELETE, &format!("/posts/{id}")))
            .await
    }

    // Users

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.send(
            self.request(Method::GET, &format!("/users/{id}")),
            ResponseShape::Enveloped,
        )
        .await
    }

    pub async fn follow_user(&self, id: i64) -> Result<(), ApiError> {
        self.send_no_content(self.request(Method::PUT, &format!("/users/{id}/follow")))
            .await
    }

    pub async fn unfollow_user(&self, id: i64) -> Result<(), ApiError> {
        self.send_no_content(self.request(Method::PUT, &format!("/users/{id}/unfollow")))
            .await
    }

    // Feed

    pub async fn feed(&self, query: &FeedQuery) -> Result<Vec<PostWithMetadata>, ApiError> {
        self.send(
            self.request(Method::GET, "/users/feed").query(&query.pairs()),
            ResponseShape::Enveloped,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn role_json() -> serde_json::Value {
        serde_json::json!({"id": 1, "name": "user", "level": 1, "description": ""})
    }

    fn post_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "a title",
            "content": "some content",
            "tags": ["one", "two"],
            "user_id": 7,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
            "version": 0
        })
    }

    async fn client(server: &MockServer) -> Client {
        Client::new(ApiConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn test_enveloped_response_is_unwrapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": post_json(1)})),
            )
            .mount(&server)
            .await;

        let post = client(&server).await.get_post(1).await.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "a title");
    }

    #[tokio::test]
    async fn test_login_token_arrives_bare() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/authentication/token"))
            .respond_with(ResponseTemplate::new(201).set_body_json("tok-abc"))
            .mount(&server)
            .await;

        let credentials = Credentials {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };
        let token = client(&server).await.login(&credentials).await.unwrap();
        assert_eq!(token, "tok-abc");
    }

    #[tokio::test]
    async fn test_error_body_error_field_becomes_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "bad"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).await.get_post(1).await.unwrap_err();
        assert_eq!(err.to_string(), "bad");
    }

    #[tokio::test]
    async fn test_unparsable_error_body_mentions_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client(&server).await.get_post(1).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/5"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        assert!(client(&server).await.delete_post(5).await.is_ok());
    }

    #[tokio::test]
    async fn test_bearer_header_is_attached_when_token_held() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/9/follow"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client(&server).await;
        client.set_token("tok-1");
        assert!(client.follow_user(9).await.is_ok());
    }

    #[tokio::test]
    async fn test_no_bearer_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": post_json(1)})),
            )
            .mount(&server)
            .await;

        client(&server).await.get_post(1).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_cleared_token_stops_being_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": post_json(1)})),
            )
            .mount(&server)
            .await;

        let client = client(&server).await;
        client.set_token("tok-1");
        client.clear_token();
        client.get_post(1).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_feed_sends_declared_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/feed"))
            .and(query_param("limit", "20"))
            .and(query_param("offset", "0"))
            .and(query_param("sort", "desc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
            )
            .mount(&server)
            .await;

        let query = FeedQuery {
            limit: Some(20),
            offset: Some(0),
            sort: Some("desc".to_string()),
            ..Default::default()
        };
        let posts = client(&server).await.feed(&query).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_feed_omits_absent_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/feed"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
            )
            .mount(&server)
            .await;

        let query = FeedQuery {
            limit: Some(20),
            ..Default::default()
        };
        client(&server).await.feed(&query).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let query_string = requests[0].url.query().unwrap_or_default();
        assert_eq!(query_string, "limit=20");
    }
}
