use sea_orm_migration::prelude::*;

mod m20250402_000001_create_roles_table;
mod m20250402_000002_create_permissions_table;
mod m20250402_000003_create_role_has_permissions_table;
mod m20250402_000004_create_model_has_roles_table;
mod m20250402_000005_create_model_has_permissions_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250402_000001_create_roles_table::Migration),
            Box::new(m20250402_000002_create_permissions_table::Migration),
            Box::new(m20250402_000003_create_role_has_permissions_table::Migration),
            Box::new(m20250402_000004_create_model_has_roles_table::Migration),
            Box::new(m20250402_000005_create_model_has_permissions_table::Migration),
        ]
    }
}
