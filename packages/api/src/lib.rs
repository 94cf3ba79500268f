pub mod auth;
pub mod claims;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use auth::Authenticator;
pub use client::Client;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    Comment, Credentials, FeedQuery, NewPost, Post, PostWithMetadata, RegisterUser,
    RegisteredUser, Role, UpdatePost, User,
};
