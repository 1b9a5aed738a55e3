//! Domain types shared across all Safai services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod area;
pub mod complaint;
pub mod guard;
pub mod role;
pub mod session;
pub mod username;
pub mod view;
