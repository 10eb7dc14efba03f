//! Service layer for API Universe
//!
//! Holds the application state and turns user actions into backend calls.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod backend;
mod controller;
mod error;
mod state;

#[cfg(test)]
mod controller_tests;

pub use backend::DiscoveryApi;
pub use controller::{AppController, Dispatcher, compare_query};
pub use error::ServiceError;
pub use state::AppState;
