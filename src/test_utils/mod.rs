//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - An in-memory waitlist repository that enforces `email_hash` uniqueness
//! - A builder for `AppState` wired to that repository

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
