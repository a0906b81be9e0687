//! Shared utilities for modsel.
//!
//! This crate provides cross-cutting concerns used by the other modsel crates:
//! the unified error type, filesystem helpers, and terminal status lines and
//! progress indicators.

pub mod errors;
pub mod fs;
pub mod progress;
