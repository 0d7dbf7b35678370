//! Records exchanged with the remote collection endpoint.
//!
//! The endpoint speaks the JSONPlaceholder `posts` shape. Only `title` is
//! required; everything else is optional and ignored by the mapping.
use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// Category assigned to every quote mapped from a remote post.
pub const REMOTE_CATEGORY: &str = "Server";

/// One remote post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    /// Identifier assigned by the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning user, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Post title; becomes the quote text.
    pub title: String,
    /// Post body, unused by the mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RemotePost {
    /// Builds a post carrying `title` only.
    pub fn titled(title: impl Into<String>) -> Self {
        RemotePost {
            id: None,
            user_id: None,
            title: title.into(),
            body: None,
        }
    }

    /// Fixed mapping: `title` becomes the text, the category is constant.
    pub fn into_quote(self) -> Quote {
        Quote::new(self.title, REMOTE_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_jsonplaceholder_post() {
        let raw = r#"{"userId":1,"id":3,"title":"ea molestias","body":"et iusto"}"#;
        let post: RemotePost = serde_json::from_str(raw).unwrap();
        assert_eq!(post.id, Some(3));
        assert_eq!(post.user_id, Some(1));
        assert_eq!(post.into_quote(), Quote::new("ea molestias", REMOTE_CATEGORY));
    }

    #[test]
    fn title_only_is_enough() {
        let post: RemotePost = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(post, RemotePost::titled("t"));
    }
}
