//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::InMemoryBlogPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }

    /// Build the in-memory state described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let repo = if config.seed_posts {
            InMemoryBlogPostRepository::seeded()
        } else {
            InMemoryBlogPostRepository::new()
        };

        tracing::info!(seeded = config.seed_posts, "Application state initialized");

        Self::new(Arc::new(repo))
    }
}
