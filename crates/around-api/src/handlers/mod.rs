//! HTTP request handlers
//!
//! Handlers organized by domain area.

pub mod auth;
pub mod health;
pub mod users;
