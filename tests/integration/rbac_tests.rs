//! Authorization resolution integration tests
//!
//! Drives the public API the way a host application would: roles and
//! permissions are managed through [`RbacSystem`] and checked for a host
//! entity implementing [`Subject`](roleguard::Subject).

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, TestUser};
    use crate::{assert_err, assert_ok};
    use roleguard::{PermissionRef, RbacError, RoleRef, SubjectKey};

    #[tokio::test]
    async fn test_editor_can_publish_but_not_delete() {
        let db = TestDatabase::new().await;
        let rbac = db.rbac();

        let editor = assert_ok!(rbac.create_role("editor", None).await);
        assert_ok!(rbac.create_permission("publish-article", None).await);
        let delete = assert_ok!(rbac.create_permission("delete-article", None).await);
        assert_ok!(rbac.role(&editor).give_permission_to(["publish-article"]).await);

        let user = TestUser::new(1);
        assert_ok!(rbac.subject(&user).assign_role(["editor"]).await);

        let subject = rbac.subject(&user);
        assert!(assert_ok!(subject.has_permission_to("publish-article").await));
        assert!(!assert_ok!(subject.has_permission_to(&delete).await));
    }

    #[tokio::test]
    async fn test_remove_role_revokes_access() {
        let db = TestDatabase::new().await;
        let rbac = db.rbac();

        let editor = assert_ok!(rbac.create_role("editor", None).await);
        assert_ok!(rbac.create_permission("publish-article", None).await);
        assert_ok!(rbac.role(&editor).give_permission_to(["publish-article"]).await);

        let user = TestUser::new(1);
        let subject = rbac.subject(&user);
        assert_ok!(subject.assign_role(["editor"]).await);
        assert_ok!(subject.remove_role(["editor"]).await);

        assert!(!assert_ok!(subject.has_permission_to("publish-article").await));
    }

    #[tokio::test]
    async fn test_seeded_hierarchy() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();

        let writer = TestUser::new(1);
        let admin = TestUser::new(2);
        assert_ok!(rbac.subject(&writer).assign_role(["writer"]).await);
        assert_ok!(rbac.subject(&admin).assign_role(["admin"]).await);

        let writer = rbac.subject(&writer);
        assert!(assert_ok!(writer.has_permission_to("edit-article").await));
        assert!(!assert_ok!(writer.has_permission_to("publish-article").await));

        let admin = rbac.subject(&admin);
        for permission in ["edit-article", "publish-article", "delete-article"] {
            assert!(assert_ok!(admin.has_permission_to(permission).await));
        }
    }

    #[tokio::test]
    async fn test_direct_grant_and_role_grant_are_independent() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let user = TestUser::new(5);
        let subject = rbac.subject(&user);

        assert_ok!(subject.assign_role(["editor"]).await);
        assert_ok!(subject.give_permission_to(["publish-article"]).await);

        // Revoking the direct grant keeps the inherited one
        assert_ok!(subject.revoke_permission_to(["publish-article"]).await);
        assert!(assert_ok!(subject.has_permission_to("publish-article").await));
        assert!(!assert_ok!(subject.has_direct_permission("publish-article").await));

        // Removing the role drops it entirely
        assert_ok!(subject.remove_role(["editor"]).await);
        assert!(!assert_ok!(subject.has_permission_to("publish-article").await));
    }

    #[tokio::test]
    async fn test_has_role_accepts_mixed_references() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let writer = assert_ok!(rbac.find_role("writer").await);
        let admin = assert_ok!(rbac.find_role("admin").await);

        let user = TestUser::new(3);
        let subject = rbac.subject(&user);
        assert_ok!(subject.assign_role([RoleRef::from(&writer)]).await);

        let mixed = vec![RoleRef::from("editor"), RoleRef::from(&writer)];
        assert!(assert_ok!(subject.has_role(mixed).await));

        let neither = vec![RoleRef::from("editor"), RoleRef::from(admin.id)];
        assert!(!assert_ok!(subject.has_role(neither).await));
    }

    #[tokio::test]
    async fn test_nonexistent_permission_is_not_found_everywhere() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let editor = assert_ok!(rbac.find_role("editor").await);
        let user = TestUser::new(1);

        let missing = || PermissionRef::from("nonexistent-permission");

        let errors = vec![
            assert_err!(rbac.role(&editor).has_permission_to(missing()).await),
            assert_err!(rbac.role(&editor).give_permission_to([missing()]).await),
            assert_err!(rbac.role(&editor).revoke_permission_to([missing()]).await),
            assert_err!(rbac.subject(&user).has_permission_to(missing()).await),
            assert_err!(rbac.subject(&user).give_permission_to([missing()]).await),
            assert_err!(rbac.subject(&user).check_permission(missing()).await),
            assert_err!(rbac.find_permission(missing()).await),
        ];

        for err in errors {
            assert!(
                matches!(&err, RbacError::NotFound(msg) if msg.contains("nonexistent-permission")),
                "got {:?}",
                err
            );
        }
    }

    #[tokio::test]
    async fn test_batch_is_all_or_nothing() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let user = TestUser::new(9);
        let subject = rbac.subject(&user);

        assert_err!(subject.assign_role(["writer", "ghost", "editor"]).await);
        assert!(assert_ok!(subject.roles().await).is_empty());

        assert_err!(
            subject
                .give_permission_to(["edit-article", "nonexistent-permission"])
                .await
        );
        assert!(assert_ok!(subject.permissions().await).is_empty());
    }

    #[tokio::test]
    async fn test_roles_preserve_assignment_order() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let user = TestUser::new(4);
        let subject = rbac.subject(&user);

        assert_ok!(subject.assign_role(["editor"]).await);
        assert_ok!(subject.assign_role(["writer", "admin"]).await);

        let roles: Vec<String> = assert_ok!(subject.roles().await)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(roles.len(), 3);
        assert_eq!(roles[0], "editor");
    }

    #[tokio::test]
    async fn test_same_id_different_subject_types() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();

        let user = TestUser::new(11);
        let service = SubjectKey::new("service", "11");
        assert_ok!(rbac.subject(&user).assign_role(["admin"]).await);

        assert!(assert_ok!(rbac.subject(&user).has_permission_to("delete-article").await));
        assert!(!assert_ok!(rbac.subject(&service).has_permission_to("delete-article").await));

        let admin = assert_ok!(rbac.find_role("admin").await);
        let holders = assert_ok!(rbac.role(&admin).users().await);
        assert_eq!(holders, vec![SubjectKey::new("user", "11")]);
    }

    #[tokio::test]
    async fn test_deleted_role_no_longer_grants() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let user = TestUser::new(1);
        assert_ok!(rbac.subject(&user).assign_role(["admin", "writer"]).await);

        assert_ok!(rbac.delete_role("admin").await);

        let subject = rbac.subject(&user);
        assert!(!assert_ok!(subject.has_role(["admin"]).await));
        assert!(assert_ok!(subject.has_role(["writer"]).await));
        assert!(!assert_ok!(subject.has_permission_to("delete-article").await));
        assert!(assert_ok!(subject.has_permission_to("edit-article").await));
    }

    #[tokio::test]
    async fn test_effective_permissions() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let user = TestUser::new(1);
        let subject = rbac.subject(&user);
        assert_ok!(subject.assign_role(["writer"]).await);
        assert_ok!(subject.give_permission_to(["delete-article"]).await);

        let names: Vec<String> = assert_ok!(subject.get_all_permissions().await)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["delete-article", "edit-article"]);

        let check = assert_ok!(subject.check_permission("edit-article").await);
        assert!(check.granted);
        assert!(!check.direct);
        assert_eq!(check.granted_by_roles, vec!["writer"]);
    }

    #[tokio::test]
    async fn test_concurrent_assignments_do_not_duplicate() {
        let db = TestDatabase::seeded().await;
        let rbac = db.rbac();
        let user = TestUser::new(77);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rbac = rbac.clone();
                let user = user.clone();
                tokio::spawn(async move {
                    rbac.subject(&user)
                        .assign_role(["editor", "writer"])
                        .await
                        .map(|_| ())
                })
            })
            .collect();

        for handle in handles {
            assert_ok!(handle.await.unwrap());
        }

        assert_eq!(assert_ok!(rbac.subject(&user).roles().await).len(), 2);
    }
}
