use anyhow::Context as _;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, SqlErr};
use uuid::Uuid;

use safai_accounts_schema::profiles;
use safai_domain::role::Role;

use crate::domain::repository::{InsertOutcome, ProfileRepository};
use crate::domain::types::Profile;
use crate::error::AccountsServiceError;

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AccountsServiceError> {
        let model = profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find profile by id")?;
        Ok(model.map(profile_from_model))
    }

    async fn insert(&self, profile: &Profile) -> Result<InsertOutcome, AccountsServiceError> {
        let result = profiles::ActiveModel {
            id: Set(profile.id),
            username: Set(profile.username.clone()),
            username_lower: Set(profile.username.to_lowercase()),
            account_type: Set(profile.role.as_str().to_owned()),
            area_code: Set(profile.area_code.clone()),
            created_at: Set(profile.created_at),
            updated_at: Set(profile.updated_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) => match e.sql_err() {
                // Two unique constraints can fire: the primary key (profile
                // already exists for this account) and username_lower.
                Some(SqlErr::UniqueConstraintViolation(msg)) => {
                    if msg.contains("username") {
                        Ok(InsertOutcome::UsernameConflict)
                    } else {
                        Ok(InsertOutcome::IdConflict)
                    }
                }
                _ => Err(anyhow::Error::new(e).context("insert profile").into()),
            },
        }
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        id: model.id,
        // Unknown stored role strings collapse to the default citizen role.
        role: Role::from_str(&model.account_type).unwrap_or_default(),
        username: model.username,
        area_code: model.area_code,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
