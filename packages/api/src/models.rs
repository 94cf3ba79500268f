//! # Wire types for the posting service
//!
//! Defines the data structures exchanged with the backend. Everything here is
//! an ephemeral snapshot of server-owned state: values are created fresh on
//! every fetch and discarded on navigation, never cached or reconciled.
//!
//! Timestamps stay the RFC 3339 strings the backend sends; the backend owns
//! their format and the views only display them.

use serde::{Deserialize, Serialize};

/// A role attached to a user account. Read-only from the client's side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub description: String,
}

/// A user account as the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub is_active: bool,
    pub role: Role,
}

/// A post, optionally carrying its embedded comments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub user_id: i64,
    pub created_at: String,
    pub updated_at: String,
    /// Optimistic-concurrency counter owned by the backend.
    pub version: i64,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

/// Feed listing variant of [`Post`]: the author and a comment count ride
/// along in the same flat JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostWithMetadata {
    #[serde(flatten)]
    pub post: Post,
    pub user: User,
    pub comments_count: i64,
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Payload for creating an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for authenticating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// What registration returns: the new account plus its activation token.
/// The account cannot log in until the token is consumed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub user: User,
    pub token: String,
}

/// Payload for creating a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Partial-update payload for a post. Absent fields are left untouched by
/// the backend and are omitted from the serialized body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Feed query options. Every field is optional; absent fields are omitted
/// from the query string entirely. Search and sort are performed by the
/// backend — these are inputs to it, not client-side filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub tags: Option<String>,
    pub search: Option<String>,
}

impl FeedQuery {
    /// Flatten into query parameters, skipping absent options. Parameter
    /// order is field declaration order and is not contractual.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(since) = &self.since {
            pairs.push(("since", since.clone()));
        }
        if let Some(until) = &self.until {
            pairs.push(("until", until.clone()));
        }
        if let Some(tags) = &self.tags {
            pairs.push(("tags", tags.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
