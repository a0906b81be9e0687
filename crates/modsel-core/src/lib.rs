//! Core data types for modsel.
//!
//! This crate defines the values that flow between registry ingestion and the
//! resolver: module identities (`name@version`), dependency edges and their
//! kind, the resolver configuration, and the registry snapshot format.
//!
//! This crate is intentionally free of async code and graph algorithms.

pub mod config;
pub mod dependency;
pub mod module_key;
pub mod snapshot;
