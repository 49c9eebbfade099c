use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleHasPermissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoleHasPermissions::RoleId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoleHasPermissions::PermissionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoleHasPermissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_role_has_permissions")
                            .col(RoleHasPermissions::RoleId)
                            .col(RoleHasPermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_has_permissions_role_id")
                            .from(RoleHasPermissions::Table, RoleHasPermissions::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_has_permissions_permission_id")
                            .from(RoleHasPermissions::Table, RoleHasPermissions::PermissionId)
                            .to(Permissions::Table, Permissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_role_has_permissions_permission_id")
                    .table(RoleHasPermissions::Table)
                    .col(RoleHasPermissions::PermissionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleHasPermissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RoleHasPermissions {
    Table,
    RoleId,
    PermissionId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Permissions {
    Table,
    Id,
}
