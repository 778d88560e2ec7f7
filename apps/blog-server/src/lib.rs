//! # Blog Server
//!
//! Actix-web service exposing in-memory blog posts under `/blog-posts`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use server::{RunningServer, start};
