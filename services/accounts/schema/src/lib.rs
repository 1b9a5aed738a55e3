//! sea-orm entities for the accounts service.

pub mod profiles;
