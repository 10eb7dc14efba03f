//! Core types for API Universe
//!
//! View models, backend wire types, the search response mapper and the
//! fixed demo datasets shared by every other crate.

mod agent;
pub mod constants;
pub mod demo;
mod env_config;
mod error;
mod search;
mod view;
mod wire;

#[cfg(test)]
mod search_tests;

pub use agent::*;
pub use env_config::{env_parse_with_default, env_timeout};
pub use error::*;
pub use search::*;
pub use view::*;
pub use wire::*;
