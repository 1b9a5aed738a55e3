use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use safai_complaints_schema::complaints;
use safai_domain::complaint::ComplaintStatus;

use crate::domain::repository::ComplaintRepository;
use crate::domain::types::Complaint;
use crate::error::ComplaintsServiceError;

#[derive(Clone)]
pub struct DbComplaintRepository {
    pub db: DatabaseConnection,
}

impl ComplaintRepository for DbComplaintRepository {
    async fn list_by_area(
        &self,
        area_code: &str,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        let mut query =
            complaints::Entity::find().filter(complaints::Column::Pincode.eq(area_code));
        if let Some(status) = status {
            query = query.filter(complaints::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(complaints::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list complaints by area")?;
        Ok(models.into_iter().map(complaint_from_model).collect())
    }

    async fn list_by_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        let models = complaints::Entity::find()
            .filter(complaints::Column::UserId.eq(user_id))
            .order_by_desc(complaints::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list complaints by owner")?;
        Ok(models.into_iter().map(complaint_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Complaint>, ComplaintsServiceError> {
        let model = complaints::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find complaint by id")?;
        Ok(model.map(complaint_from_model))
    }

    async fn insert(&self, complaint: &Complaint) -> Result<(), ComplaintsServiceError> {
        complaints::ActiveModel {
            id: Set(complaint.id),
            user_id: Set(complaint.user_id),
            title: Set(complaint.title.clone()),
            location: Set(complaint.location.clone()),
            pincode: Set(complaint.pincode.clone()),
            description: Set(complaint.description.clone()),
            image_url: Set(complaint.image_url.clone()),
            after_image_url: Set(complaint.after_image_url.clone()),
            status: Set(complaint.status.as_str().to_owned()),
            created_at: Set(complaint.created_at),
            updated_at: Set(complaint.updated_at),
        }
        .insert(&self.db)
        .await
        .context("insert complaint")?;
        Ok(())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ComplaintStatus,
        after_image_url: Option<&str>,
    ) -> Result<bool, ComplaintsServiceError> {
        let mut am = complaints::ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(url) = after_image_url {
            am.after_image_url = Set(Some(url.to_owned()));
        }
        match am.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(sea_orm::DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e)
                .context("update complaint status")
                .into()),
        }
    }

    async fn delete(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Complaint>, ComplaintsServiceError> {
        // Fetch-then-delete scoped to the owner; the returned row carries the
        // image URLs the caller still has to clean up.
        let model = complaints::Entity::find_by_id(id)
            .filter(complaints::Column::UserId.eq(owner_id))
            .one(&self.db)
            .await
            .context("find complaint for delete")?;
        let Some(model) = model else {
            return Ok(None);
        };

        let result = complaints::Entity::delete_many()
            .filter(complaints::Column::Id.eq(id))
            .filter(complaints::Column::UserId.eq(owner_id))
            .exec(&self.db)
            .await
            .context("delete complaint")?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some(complaint_from_model(model)))
    }
}

fn complaint_from_model(model: complaints::Model) -> Complaint {
    Complaint {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        location: model.location,
        pincode: model.pincode,
        description: model.description,
        image_url: model.image_url,
        after_image_url: model.after_image_url,
        status: ComplaintStatus::from_str(&model.status).unwrap_or_default(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
