//! Administrative command line

mod commands;

pub use commands::run;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roleguard")]
#[command(about = "Manage roles, permissions and subject assignments")]
#[command(version)]
pub struct Cli {
    /// YAML configuration file; the environment is used when omitted
    #[arg(long, short, env = "ROLEGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, env = "ROLEGUARD_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or upgrade the database schema
    Migrate,
    /// Create the roles and permissions declared in the configuration
    Seed,
    /// Manage roles
    #[command(subcommand)]
    Role(EntityCommand),
    /// Manage permissions
    #[command(subcommand)]
    Permission(EntityCommand),
    /// Grant permissions to a role
    Grant(RolePermissionsCommand),
    /// Revoke permissions from a role
    Revoke(RolePermissionsCommand),
    /// Assign roles to a subject
    Assign(SubjectTargetsCommand),
    /// Remove roles from a subject
    Unassign(SubjectTargetsCommand),
    /// Grant permissions directly to a subject
    Allow(SubjectTargetsCommand),
    /// Revoke direct permissions from a subject
    Deny(SubjectTargetsCommand),
    /// Check whether a subject holds a permission
    Check(CheckCommand),
    /// Show roles and permissions of a subject
    Show(SubjectCommand),
}

#[derive(Subcommand, Debug)]
pub enum EntityCommand {
    /// Create a new entry
    Create(CreateCommand),
    /// Delete an entry and all of its assignments
    Delete(NameCommand),
    /// List all entries
    List,
}

#[derive(Args, Debug)]
pub struct CreateCommand {
    /// Unique name
    pub name: String,

    /// Optional human readable description
    #[arg(long, short)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct NameCommand {
    pub name: String,
}

#[derive(Args, Debug)]
pub struct RolePermissionsCommand {
    /// Role name
    pub role: String,

    /// Permission names
    #[arg(required = true)]
    pub permissions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SubjectCommand {
    /// Subject type, e.g. `user`
    pub subject_type: String,

    /// Subject identifier within its type
    pub subject_id: String,
}

#[derive(Args, Debug)]
pub struct SubjectTargetsCommand {
    #[command(flatten)]
    pub subject: SubjectCommand,

    /// Role or permission names
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub subject: SubjectCommand,

    /// Permission name
    pub permission: String,
}
