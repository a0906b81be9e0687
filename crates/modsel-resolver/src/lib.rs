//! Dependency graph and Minimum Version Selection (MVS) engine.
//!
//! Builds directed graphs over `name@version` identities, reports circular
//! dependency groups, and computes, for every module version in a registry,
//! which version of each transitive dependency would be selected if that
//! module version were the build root.

pub mod cycles;
pub mod engine;
pub mod graph;
pub mod mvs;
pub mod registry;
pub mod version;
