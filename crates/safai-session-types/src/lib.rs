//! Session types shared across Safai services.
//!
//! Provides provider session-token validation, the session-change event
//! feed types, and the `IdentityHeaders` extractor.

pub mod event;
pub mod identity;
pub mod token;
