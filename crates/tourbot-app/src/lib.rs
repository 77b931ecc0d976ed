//! Shared helpers for the TourBot binaries.
//!
//! The `tourbot` server and `tourbot-ingest` corpus builder both resolve
//! configuration the same way (CLI flag > env var > config file > default)
//! and share the document-reading helpers.

pub mod cli;
pub mod ingest;
