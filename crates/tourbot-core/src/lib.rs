//! Shared types, configuration, and errors for TourBot.
//!
//! TourBot is a retrieval-augmented travel assistant over a small, pre-built
//! document corpus. This crate holds the pieces every other crate needs:
//! the conversation and passage types, the TOML configuration, and the
//! top-level error type.

pub mod config;
pub mod error;
pub mod types;

pub use config::TourbotConfig;
pub use error::{Result, TourbotError};
pub use types::{Passage, Role, Turn};
