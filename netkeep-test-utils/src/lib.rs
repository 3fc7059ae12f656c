//! Test utilities shared across the netkeep workspace
//!
//! This crate provides common testing infrastructure including:
//! - HOME directory isolation ([`HomeEnvTestGuard`])
//! - Credential files inside an isolated HOME ([`NetrcGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod home;
pub mod netrc;

// Re-export commonly used items
pub use home::HomeEnvTestGuard;
pub use netrc::NetrcGuard;
