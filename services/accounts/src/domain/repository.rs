#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::Profile;
use crate::error::AccountsServiceError;

/// Outcome of an insert attempt against the profiles table.
///
/// The unique constraints live in the database; the repository reports which
/// one fired so the use case can pick the right conflict branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Another account already holds this username (case-insensitive).
    UsernameConflict,
    /// A profile already exists for this user id.
    IdConflict,
}

/// Repository for application profiles.
pub trait ProfileRepository: Send + Sync {
    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, AccountsServiceError>> + Send;
    fn insert(
        &self,
        profile: &Profile,
    ) -> impl Future<Output = Result<InsertOutcome, AccountsServiceError>> + Send;
}
