//! Output projections of [`Post`].
//!
//! Neither projection has a password field, so nothing serialized from them
//! can expose one.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Post, PostId};

/// List projection - everything except content and password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub post_id: PostId,
    pub nickname: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostSummary {
    pub fn from_post(post: Post) -> Self {
        Self {
            post_id: post.post_id,
            nickname: post.nickname,
            title: post.title,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Detail projection - returned by lookup, create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub post_id: PostId,
    pub nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDetail {
    pub fn from_post(post: Post) -> Self {
        Self {
            post_id: post.post_id,
            nickname: post.nickname,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        let created_at = "2024-10-17T07:32:21.757Z".parse().unwrap();
        let updated_at = "2024-10-17T07:32:47.031Z".parse().unwrap();
        Post {
            post_id: 1,
            nickname: "A".to_string(),
            password: "1234".to_string(),
            title: "Update Title Test".to_string(),
            content: "테스트용 코드입니다.".to_string(),
            created_at,
            updated_at,
        }
    }

    #[test]
    fn summary_omits_content_and_password() {
        let json = serde_json::to_value(PostSummary::from_post(sample())).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("content"));
        assert_eq!(obj["postId"], 1);
        assert_eq!(obj["nickname"], "A");
        assert_eq!(obj["createdAt"], "2024-10-17T07:32:21.757Z");
    }

    #[test]
    fn detail_keeps_content_but_omits_password() {
        let json = serde_json::to_value(PostDetail::from_post(sample())).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("password"));
        assert_eq!(obj["content"], "테스트용 코드입니다.");
        assert_eq!(obj["updatedAt"], "2024-10-17T07:32:47.031Z");
        assert_eq!(obj.len(), 6);
    }
}
