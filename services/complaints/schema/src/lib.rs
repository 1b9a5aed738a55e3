//! sea-orm entities for the complaints service.

pub mod complaints;
