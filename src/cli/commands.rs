//! Command execution

use super::{Cli, Commands, EntityCommand, SubjectCommand};
use crate::auth::RbacSystem;
use crate::config::Config;
use crate::core::models::SubjectKey;
use crate::storage::Database;
use anyhow::Context;
use std::sync::Arc;
use tracing::{debug, info};

/// Load configuration, connect and execute the parsed command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
    .context("Failed to load configuration")?;

    let db = Database::new(&config.database)
        .await
        .context("Failed to connect to database")?;
    debug!("Using {:?} backend", db.backend_type());

    let rbac = RbacSystem::new(Arc::new(db), &config.rbac);
    info!("Running command {:?}", cli.command);

    match cli.command {
        Commands::Migrate => {
            rbac.database().migrate().await?;
            println!("Migrations applied");
        }
        Commands::Seed => {
            rbac.seed().await?;
            println!("Seed completed");
        }
        Commands::Role(cmd) => role_command(&rbac, cmd).await?,
        Commands::Permission(cmd) => permission_command(&rbac, cmd).await?,
        Commands::Grant(cmd) => {
            let role = rbac.find_role(cmd.role.as_str()).await?;
            rbac.role(&role).give_permission_to(&cmd.permissions).await?;
            println!("Granted {} to role '{}'", cmd.permissions.join(", "), role.name);
        }
        Commands::Revoke(cmd) => {
            let role = rbac.find_role(cmd.role.as_str()).await?;
            rbac.role(&role)
                .revoke_permission_to(&cmd.permissions)
                .await?;
            println!("Revoked {} from role '{}'", cmd.permissions.join(", "), role.name);
        }
        Commands::Assign(cmd) => {
            let subject = subject_key(&cmd.subject);
            rbac.subject(&subject).assign_role(&cmd.names).await?;
            println!("Assigned {} to {}", cmd.names.join(", "), subject);
        }
        Commands::Unassign(cmd) => {
            let subject = subject_key(&cmd.subject);
            rbac.subject(&subject).remove_role(&cmd.names).await?;
            println!("Removed {} from {}", cmd.names.join(", "), subject);
        }
        Commands::Allow(cmd) => {
            let subject = subject_key(&cmd.subject);
            rbac.subject(&subject).give_permission_to(&cmd.names).await?;
            println!("Allowed {} for {}", cmd.names.join(", "), subject);
        }
        Commands::Deny(cmd) => {
            let subject = subject_key(&cmd.subject);
            rbac.subject(&subject)
                .revoke_permission_to(&cmd.names)
                .await?;
            println!("Revoked direct {} from {}", cmd.names.join(", "), subject);
        }
        Commands::Check(cmd) => {
            let subject = subject_key(&cmd.subject);
            let check = rbac
                .subject(&subject)
                .check_permission(cmd.permission.as_str())
                .await?;
            println!("{}", if check.granted { "allowed" } else { "denied" });
            debug!("{}", serde_json::to_string(&check)?);
        }
        Commands::Show(cmd) => show_subject(&rbac, &subject_key(&cmd)).await?,
    }

    Ok(())
}

async fn role_command(rbac: &RbacSystem, cmd: EntityCommand) -> anyhow::Result<()> {
    match cmd {
        EntityCommand::Create(cmd) => {
            let role = rbac.create_role(&cmd.name, cmd.description).await?;
            println!("Created role '{}' ({})", role.name, role.id);
        }
        EntityCommand::Delete(cmd) => {
            rbac.delete_role(cmd.name.as_str()).await?;
            println!("Deleted role '{}'", cmd.name);
        }
        EntityCommand::List => {
            for role in rbac.list_roles().await? {
                println!(
                    "{}\t{}\t{}",
                    role.id,
                    role.name,
                    role.description.unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}

async fn permission_command(rbac: &RbacSystem, cmd: EntityCommand) -> anyhow::Result<()> {
    match cmd {
        EntityCommand::Create(cmd) => {
            let permission = rbac.create_permission(&cmd.name, cmd.description).await?;
            println!("Created permission '{}' ({})", permission.name, permission.id);
        }
        EntityCommand::Delete(cmd) => {
            rbac.delete_permission(cmd.name.as_str()).await?;
            println!("Deleted permission '{}'", cmd.name);
        }
        EntityCommand::List => {
            for permission in rbac.list_permissions().await? {
                println!(
                    "{}\t{}\t{}",
                    permission.id,
                    permission.name,
                    permission.description.unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}

async fn show_subject(rbac: &RbacSystem, subject: &SubjectKey) -> anyhow::Result<()> {
    let handle = rbac.subject(subject);
    let roles: Vec<String> = handle.roles().await?.into_iter().map(|r| r.name).collect();
    let direct: Vec<String> = handle
        .permissions()
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();
    let effective: Vec<String> = handle
        .get_all_permissions()
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();

    let report = serde_json::json!({
        "subject": subject.to_string(),
        "roles": roles,
        "direct_permissions": direct,
        "permissions": effective,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn subject_key(cmd: &SubjectCommand) -> SubjectKey {
    SubjectKey::new(&cmd.subject_type, &cmd.subject_id)
}
