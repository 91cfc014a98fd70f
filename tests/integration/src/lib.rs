//! Integration test utilities
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with an in-memory credential store.

pub mod helpers;

pub use helpers::*;
pub use fixtures::*;
