//! In-memory blog post repository.
//!
//! Posts live in an ordered `Vec` behind an async `RwLock`.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::seed::seed_posts;

/// In-memory post store, ordered by insertion.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// A store pre-populated with the seed posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!(
                "post id {} already exists",
                post.id
            )));
        }

        tracing::debug!(post_id = %post.id, "Creating blog post");
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        tracing::debug!(post_id = %id, "Updating blog post");
        post.apply(changes);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        tracing::debug!(post_id = %id, "Deleting blog post");
        // Remaining posts keep their relative order.
        posts.remove(index);
        Ok(())
    }
}
