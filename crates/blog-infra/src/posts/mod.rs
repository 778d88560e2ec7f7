//! Blog post storage implementations.

mod memory;
mod seed;

pub use memory::InMemoryBlogPostRepository;
