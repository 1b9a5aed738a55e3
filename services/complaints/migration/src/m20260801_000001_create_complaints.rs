use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Complaints::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Complaints::UserId).uuid().not_null())
                    .col(ColumnDef::new(Complaints::Title).string().not_null())
                    .col(ColumnDef::new(Complaints::Location).string().not_null())
                    .col(ColumnDef::new(Complaints::Pincode).string().not_null())
                    .col(ColumnDef::new(Complaints::Description).text().not_null())
                    .col(ColumnDef::new(Complaints::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Complaints::AfterImageUrl).string().null())
                    .col(
                        ColumnDef::new(Complaints::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Complaints::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Complaints::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboards list by area; citizens list by ownership.
        manager
            .create_index(
                Index::create()
                    .table(Complaints::Table)
                    .col(Complaints::Pincode)
                    .name("idx_complaints_pincode")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Complaints::Table)
                    .col(Complaints::UserId)
                    .name("idx_complaints_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_complaints_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_complaints_pincode").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Complaints::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Complaints {
    Table,
    Id,
    UserId,
    Title,
    Location,
    Pincode,
    Description,
    ImageUrl,
    AfterImageUrl,
    Status,
    CreatedAt,
    UpdatedAt,
}
