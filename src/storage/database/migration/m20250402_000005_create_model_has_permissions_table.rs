use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModelHasPermissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ModelHasPermissions::PermissionId).integer().not_null())
                    .col(ColumnDef::new(ModelHasPermissions::ModelType).string().not_null())
                    .col(ColumnDef::new(ModelHasPermissions::ModelId).string().not_null())
                    .col(
                        ColumnDef::new(ModelHasPermissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_model_has_permissions")
                            .col(ModelHasPermissions::PermissionId)
                            .col(ModelHasPermissions::ModelType)
                            .col(ModelHasPermissions::ModelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_model_has_permissions_permission_id")
                            .from(ModelHasPermissions::Table, ModelHasPermissions::PermissionId)
                            .to(Permissions::Table, Permissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Subject lookups filter on the type/id pair first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_model_has_permissions_model")
                    .table(ModelHasPermissions::Table)
                    .col(ModelHasPermissions::ModelType)
                    .col(ModelHasPermissions::ModelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModelHasPermissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ModelHasPermissions {
    Table,
    PermissionId,
    ModelType,
    ModelId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Permissions {
    Table,
    Id,
}
