use sea_orm::entity::prelude::*;

/// Application profile augmenting an identity-provider account.
///
/// `id` is the provider's user id — one profile per account. `username_lower`
/// is a lowercased copy of `username` carrying the case-insensitive unique
/// constraint; it is maintained by the repository, never exposed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    #[sea_orm(unique)]
    pub username_lower: String,
    pub account_type: String,
    pub area_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
