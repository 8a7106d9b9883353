//! Data Transfer Objects - request bodies of the posts API.
//!
//! Every field is optional on the wire; presence is checked by the handlers
//! so a missing field becomes a 400 instead of a deserialization failure.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `PUT /api/posts/{postId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub password: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `DELETE /api/posts/{postId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletePostRequest {
    pub password: Option<String>,
}
