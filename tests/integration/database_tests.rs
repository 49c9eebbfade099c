//! Database integration tests
//!
//! Tests assignment store operations using a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::database::test_db_config;
    use crate::common::TestDatabase;
    use roleguard::core::models::{PermissionId, RoleId, SubjectKey};
    use roleguard::storage::database::DatabaseBackendType;
    use roleguard::{Database, DatabaseConfig, RbacError};

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = Database::new(&test_db_config()).await;
        assert!(db.is_ok(), "Failed to create database: {:?}", db.err());

        let db = db.unwrap();
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);

        // Run migrations first to create required tables
        let migrate_result = db.migrate().await;
        assert!(
            migrate_result.is_ok(),
            "Migration failed: {:?}",
            migrate_result.err()
        );

        let health = db.health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Health check fails before the schema exists
    #[tokio::test]
    async fn test_health_check_requires_schema() {
        let db = Database::new(&test_db_config()).await.unwrap();
        assert!(db.health_check().await.is_err());
    }

    /// Migrations can be applied repeatedly
    #[tokio::test]
    async fn test_migration_is_repeatable() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());
    }

    /// A file database opens under a missing directory and keeps its rows across reopen
    #[tokio::test]
    async fn test_file_database_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("rbac");
        let config = DatabaseConfig {
            url: format!("sqlite://{}/roleguard.db?mode=rwc", nested.display()),
            max_connections: 2,
            connection_timeout: 5,
        };
        assert!(!nested.exists());

        let db = Database::new(&config).await.unwrap();
        assert!(nested.is_dir());
        db.migrate().await.unwrap();
        db.insert_role("editor", None, "web").await.unwrap();
        db.close().await.unwrap();

        let db = Database::new(&config).await.unwrap();
        let role = db.find_role_by_name("editor").await.unwrap();
        assert_eq!(role.map(|r| r.guard_name), Some("web".to_string()));
        db.close().await.unwrap();
    }

    /// Test role insert and lookup
    #[tokio::test]
    async fn test_role_operations() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();

        let role = db
            .insert_role("editor", Some("Edits".to_string()), "web")
            .await
            .unwrap();
        assert_eq!(role.guard_name, "web");

        let by_id = db.find_role_by_id(role.id).await.unwrap();
        assert_eq!(by_id.as_ref().map(|r| r.name.as_str()), Some("editor"));

        let by_name = db.find_role_by_name("editor").await.unwrap();
        assert_eq!(by_name.map(|r| r.id), Some(role.id));

        assert!(db.find_role_by_name("ghost").await.unwrap().is_none());
        assert!(db.find_role_by_id(RoleId(9999)).await.unwrap().is_none());
    }

    /// Batch lookup silently skips missing names
    #[tokio::test]
    async fn test_find_by_names() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();
        db.insert_permission("a", None, "web").await.unwrap();
        db.insert_permission("b", None, "web").await.unwrap();

        let names = vec!["a".to_string(), "missing".to_string(), "b".to_string()];
        let found = db.find_permissions_by_names(&names).await.unwrap();
        assert_eq!(found.len(), 2);

        assert!(db.find_permissions_by_names(&[]).await.unwrap().is_empty());
    }

    /// Unique name constraint surfaces as a conflict
    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();
        db.insert_permission("publish", None, "web").await.unwrap();

        let err = db.insert_permission("publish", None, "web").await.unwrap_err();
        assert!(matches!(err, RbacError::Conflict(_)), "got {:?}", err);
    }

    /// Linking twice leaves one association row
    #[tokio::test]
    async fn test_role_permission_links_are_unique() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();
        let role = db.insert_role("editor", None, "web").await.unwrap();
        let permission = db.insert_permission("publish", None, "web").await.unwrap();

        db.link_role_permissions(role.id, &[permission.id]).await.unwrap();
        db.link_role_permissions(role.id, &[permission.id]).await.unwrap();
        db.link_permission_roles(permission.id, &[role.id]).await.unwrap();

        assert_eq!(db.permissions_for_role(role.id).await.unwrap().len(), 1);
        assert_eq!(db.roles_for_permission(permission.id).await.unwrap().len(), 1);
        assert!(db.role_has_permission(role.id, permission.id).await.unwrap());

        db.unlink_permission_roles(permission.id, &[role.id]).await.unwrap();
        assert!(!db.role_has_permission(role.id, permission.id).await.unwrap());
    }

    /// Subject associations are keyed by type and id
    #[tokio::test]
    async fn test_subject_links() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();
        let role = db.insert_role("editor", None, "web").await.unwrap();
        let permission = db.insert_permission("publish", None, "web").await.unwrap();

        let user = SubjectKey::new("user", "1");
        let team = SubjectKey::new("team", "1");

        db.link_subject_roles(&user, &[role.id]).await.unwrap();
        db.link_subject_roles(&user, &[role.id]).await.unwrap();
        db.link_subject_permissions(&team, &[permission.id]).await.unwrap();

        assert!(db.subject_has_role(&user, role.id).await.unwrap());
        assert!(db.subject_has_role_named(&user, "editor").await.unwrap());
        assert!(!db.subject_has_role(&team, role.id).await.unwrap());
        assert!(!db.subject_has_permission(&user, permission.id).await.unwrap());
        assert!(db.subject_has_permission(&team, permission.id).await.unwrap());

        assert_eq!(db.roles_for_subject(&user).await.unwrap().len(), 1);
        assert_eq!(db.subjects_for_role(role.id, None).await.unwrap(), vec![user.clone()]);
        assert!(db.subjects_for_role(role.id, Some("team")).await.unwrap().is_empty());
        assert_eq!(
            db.subjects_for_permission(permission.id, None).await.unwrap(),
            vec![team.clone()]
        );

        db.unlink_subject_roles(&user, &[role.id]).await.unwrap();
        db.unlink_subject_permissions(&team, &[permission.id]).await.unwrap();
        assert!(db.roles_for_subject(&user).await.unwrap().is_empty());
        assert!(db.permissions_for_subject(&team).await.unwrap().is_empty());
    }

    /// Linking a role id that does not exist violates the foreign key
    #[tokio::test]
    async fn test_dangling_link_is_constraint_violation() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();
        let subject = SubjectKey::new("user", "1");

        let err = db
            .link_subject_permissions(&subject, &[PermissionId(404)])
            .await
            .unwrap_err();
        assert!(matches!(err, RbacError::ConstraintViolation(_)), "got {:?}", err);
    }

    /// Deleting a role removes its association rows
    #[tokio::test]
    async fn test_delete_role_removes_links() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();
        let role = db.insert_role("editor", None, "web").await.unwrap();
        let permission = db.insert_permission("publish", None, "web").await.unwrap();
        let user = SubjectKey::new("user", "1");
        db.link_role_permissions(role.id, &[permission.id]).await.unwrap();
        db.link_subject_roles(&user, &[role.id]).await.unwrap();

        assert!(db.delete_role(role.id).await.unwrap());
        assert!(!db.delete_role(role.id).await.unwrap());

        assert!(db.roles_for_subject(&user).await.unwrap().is_empty());
        assert!(db.roles_for_permission(permission.id).await.unwrap().is_empty());
    }
}
