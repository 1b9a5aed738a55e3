//! Shared service plumbing for Safai services.
//!
//! Config loading, health endpoints, request-id middleware, serde helpers,
//! and tracing initialization. Domain logic never lives here.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
