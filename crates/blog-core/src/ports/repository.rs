use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges};
use crate::error::RepoError;

/// Blog post storage. Implementations keep posts in insertion order.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// All posts, in insertion order.
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Append a new post. Fails with [`RepoError::Constraint`] if the id is already taken.
    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Merge `changes` into the stored post in place and return the result.
    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError>;

    /// Remove a post by its ID.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
