use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

const ENTITY_TYPE: &str = "BlogPost";

/// Blog post entity.
///
/// `id` and `publish_date` are assigned once by [`BlogPost::new`] and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID and the current time as publish date.
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            publish_date: Utc::now(),
        }
    }

    /// Merge the supplied fields into this post in place.
    pub fn apply(&mut self, changes: BlogPostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

impl From<NewBlogPost> for BlogPost {
    fn from(new: NewBlogPost) -> Self {
        BlogPost::new(new.title, new.content, new.author)
    }
}

/// The validated input of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewBlogPost {
    /// Build a new post from optional request fields.
    ///
    /// Fields are checked in `title`, `content`, `author` order and the first
    /// missing one is reported.
    pub fn try_from_parts(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = required(title, "title")?;
        let content = required(content, "content")?;
        let author = required(author, "author")?;
        validate_title(&title)?;

        Ok(Self {
            title,
            content,
            author,
        })
    }
}

/// Fields an update may change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl BlogPostChanges {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}

/// Parse an id taken from a request path.
///
/// Ids are opaque to clients: only the exact string the API handed out (lowercase,
/// hyphenated) names a post. Anything else is reported as an unknown id.
pub fn parse_post_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw)
        .ok()
        .filter(|id| id.hyphenated().to_string() == raw)
        .ok_or_else(|| DomainError::NotFound {
            entity_type: ENTITY_TYPE,
            id: raw.to_string(),
        })
}

fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    value.ok_or_else(|| DomainError::Validation(format!("Missing `{field}` in request body")))
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost::new(
            "Lorem ip some".to_string(),
            "foo foo foo foo".to_string(),
            "Emma Goldman".to_string(),
        )
    }

    #[test]
    fn test_serializes_exactly_five_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["author", "content", "id", "publishDate", "title"]);
    }

    #[test]
    fn test_apply_preserves_identity_fields() {
        let mut post = sample();
        let before = post.clone();

        post.apply(BlogPostChanges {
            title: Some("connect the dots".to_string()),
            content: Some("la la la la la".to_string()),
            author: None,
        });

        assert_eq!(post.id, before.id);
        assert_eq!(post.publish_date, before.publish_date);
        assert_eq!(post.author, before.author);
        assert_eq!(post.title, "connect the dots");
        assert_eq!(post.content, "la la la la la");
    }

    #[test]
    fn test_new_posts_get_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_missing_field_is_reported_in_order() {
        let err = NewBlogPost::try_from_parts(None, None, Some("a".to_string())).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("`title`")));

        let err = NewBlogPost::try_from_parts(Some("t".to_string()), Some("c".to_string()), None)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("`author`")));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let err = NewBlogPost::try_from_parts(
            Some("   ".to_string()),
            Some("c".to_string()),
            Some("a".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let changes = BlogPostChanges {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(changes.validate().is_err());
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        let err = parse_post_id("not-an-id").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id, .. } if id == "not-an-id"));
    }

    #[test]
    fn test_only_canonical_id_form_is_accepted() {
        let id = Uuid::new_v4();
        assert_eq!(parse_post_id(&id.to_string()).unwrap(), id);

        let variants = [
            id.hyphenated().to_string().to_uppercase(),
            id.simple().to_string(),
            id.braced().to_string(),
            id.urn().to_string(),
        ];
        for raw in variants {
            assert!(
                matches!(parse_post_id(&raw), Err(DomainError::NotFound { .. })),
                "{raw} should not resolve"
            );
        }
    }
}
