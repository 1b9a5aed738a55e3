//! Test utilities for Safai services.
//!
//! Provides `MockIdentity` header injection and session fixture builders.
//! Import in `#[cfg(test)]` blocks only — never in production code.

pub mod identity;
pub mod session;
