use clap::{Args, Subcommand};
use hrm_core::enums::EntityType;

use crate::cli::subcommands::AccountCommands;
use crate::commands::shared::parse::parse_record_type;

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every record of an entity type, newest first.
    List(ListArgs),
    /// Fetch one record by id.
    Get(RecordArgs),
    /// Create a record from a JSON body.
    Create(CreateArgs),
    /// Apply a partial JSON update to a record.
    Update(UpdateArgs),
    /// Delete a record by id.
    Delete(RecordArgs),
    /// Snapshots recorded against one KPI.
    Snapshots(SnapshotsArgs),
    /// Query the audit log.
    History(HistoryArgs),
    /// User and admin accounts.
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Entity type (company, kpi, kpi-snapshot, job-posting, organization,
    /// competitor, faq, selection-step)
    #[arg(value_parser = parse_record_type)]
    pub entity: EntityType,
}

#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    #[arg(value_parser = parse_record_type)]
    pub entity: EntityType,
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(value_parser = parse_record_type)]
    pub entity: EntityType,
    /// JSON object with camelCase keys, or `@path` to read it from a file
    #[arg(long)]
    pub data: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    #[arg(value_parser = parse_record_type)]
    pub entity: EntityType,
    pub id: String,
    /// JSON object with only the keys to change, or `@path`
    #[arg(long)]
    pub data: String,
}

#[derive(Clone, Debug, Args)]
pub struct SnapshotsArgs {
    pub kpi_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    #[arg(long)]
    pub entity_id: Option<String>,
    #[arg(long)]
    pub entity_type: Option<String>,
    /// create, update or delete
    #[arg(long)]
    pub action: Option<String>,
}
