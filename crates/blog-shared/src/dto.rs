//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a blog post.
///
/// Fields are optional here so a missing key can be reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Request to update a blog post. Omitted fields are left unchanged.
///
/// Clients commonly send back the whole post they listed, so `id` is accepted
/// and checked against the path. `publishDate` and other keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A blog post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_ignores_publish_date_and_unknown_keys() {
        let req: UpdateBlogPostRequest = serde_json::from_str(
            r#"{"id":"abc","title":"t","publishDate":"2020-01-01T00:00:00Z","extra":1}"#,
        )
        .unwrap();

        assert_eq!(req.id.as_deref(), Some("abc"));
        assert_eq!(req.title.as_deref(), Some("t"));
        assert!(req.content.is_none());
        assert!(req.author.is_none());
    }

    #[test]
    fn test_create_request_tolerates_missing_keys() {
        let req: CreateBlogPostRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert!(req.content.is_none());
    }
}
