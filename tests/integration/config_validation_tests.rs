//! Configuration validation integration tests
//!
//! Tests for configuration validation across all config components.
//! These tests verify that configuration validates correctly and fails
//! appropriately for invalid configurations.

#[cfg(test)]
mod tests {
    use crate::common::database::blog_config;
    use roleguard::config::{
        Config, DatabaseConfig, PermissionSeed, RbacConfig, RoleSeed, Validate,
    };
    use roleguard::RbacError;
    use std::io::Write;

    // ==================== DatabaseConfig Validation ====================

    #[test]
    fn test_default_database_config_is_valid() {
        assert!(DatabaseConfig::default().validate().is_ok());
        assert!(DatabaseConfig::in_memory().validate().is_ok());
    }

    #[test]
    fn test_postgres_urls_accepted() {
        for url in [
            "postgres://localhost/roleguard",
            "postgresql://user:pass@db:5432/roleguard",
        ] {
            let config = DatabaseConfig {
                url: url.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{} should be accepted", url);
        }
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let config = DatabaseConfig {
            url: "mysql://localhost/roleguard".to_string(),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.unwrap_err().contains("SQLite and PostgreSQL"));
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = DatabaseConfig {
            url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("URL"));
    }

    #[test]
    fn test_connection_bounds() {
        let mut config = DatabaseConfig::default();

        config.max_connections = 0;
        assert!(config.validate().is_err());

        config.max_connections = 1001;
        assert!(config.validate().unwrap_err().contains("1000"));

        config.max_connections = 1000;
        assert!(config.validate().is_ok());

        config.connection_timeout = 0;
        assert!(config.validate().unwrap_err().contains("timeout"));
    }

    // ==================== RbacConfig Validation ====================

    #[test]
    fn test_blog_config_is_valid() {
        assert!(blog_config().validate().is_ok());
    }

    #[test]
    fn test_empty_guard_rejected() {
        let config = RbacConfig {
            default_guard: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("guard"));
    }

    #[test]
    fn test_duplicate_permission_seed_rejected() {
        let mut config = blog_config();
        config.permissions.push(PermissionSeed {
            name: "edit-article".to_string(),
            description: None,
        });

        let err = config.validate().unwrap_err();
        assert!(err.contains("Duplicate permission seed"));
    }

    #[test]
    fn test_duplicate_role_seed_rejected() {
        let mut config = blog_config();
        config.roles.push(RoleSeed {
            name: "editor".to_string(),
            description: None,
            permissions: Vec::new(),
        });

        assert!(config.validate().unwrap_err().contains("Duplicate role seed"));
    }

    #[test]
    fn test_undeclared_permission_reference_rejected() {
        let mut config = blog_config();
        config.roles[0].permissions.push("ban-user".to_string());

        let err = config.validate().unwrap_err();
        assert!(err.contains("writer"));
        assert!(err.contains("ban-user"));
    }

    #[test]
    fn test_blank_seed_names_rejected() {
        let mut config = blog_config();
        config.roles[1].name = String::new();
        assert!(config.validate().unwrap_err().contains("Role name"));
    }

    // ==================== Config Loading ====================

    #[tokio::test]
    async fn test_config_file_wraps_section_errors() {
        let yaml = r#"
database:
  url: "sqlite::memory:"
  max_connections: 0
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(
            matches!(err, RbacError::Config(msg) if msg.starts_with("Database config error"))
        );
    }

    #[tokio::test]
    async fn test_config_file_with_seeds() {
        let yaml = r#"
rbac:
  permissions:
    - name: publish-article
  roles:
    - name: editor
      description: Publishes articles
      permissions: [publish-article]
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.rbac.default_guard, "web");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(
            config.rbac.roles[0].description.as_deref(),
            Some("Publishes articles")
        );
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"rbac: [not, a, map").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(RbacError::Config(_))));
    }
}
