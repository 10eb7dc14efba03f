//! HTTP client for the API Universe discovery backend.
//!
//! Wraps `/token`, `/search`, `/agent`, `/health` and `/metrics`. Every call
//! is made once; there is no retry or caching layer.

mod client;
pub mod error;


pub use client::{ApiClient, truncate};
pub use error::ClientError;
