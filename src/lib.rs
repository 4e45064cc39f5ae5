//! Corkbuild library exports for testing.
//!
//! Exposes the pipeline internals so integration tests can exercise them
//! without going through the binary.

pub mod config;
pub mod error;
pub mod fetch;
pub mod launch;
pub mod materialize;
pub mod preflight;
pub mod process;
