use sea_orm::entity::prelude::*;

/// A geotagged waste complaint.
///
/// `pincode` is the routing key to the staff account responsible for the
/// area; matching is exact. `after_image_url` is set only on resolution.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complaints")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub location: String,
    pub pincode: String,
    pub description: String,
    pub image_url: String,
    pub after_image_url: Option<String>,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
