//! Minimal GitHub REST API client for listing repository commits.

mod client;
mod client_builder;
mod models;

pub use client::Client;
pub use client_builder::{ClientBuilder, DEFAULT_API_BASE_URL};
pub use models::{CommitDetails, CommitRecord, GitSignature};
