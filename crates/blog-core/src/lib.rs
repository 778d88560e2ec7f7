//! # Blog Core
//!
//! The domain layer of the blog post service.
//! This crate contains the post entity and the storage port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
