//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.

pub mod posts;

pub use posts::InMemoryBlogPostRepository;
