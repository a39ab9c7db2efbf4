use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hrm` binary.
#[derive(Debug, Parser)]
#[command(name = "hrm", version, about = "HR record store - records, KPIs, audit history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Local database file (overrides `database.path` and any remote config)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// User id recorded in the audit log for mutations
    #[arg(long = "as", global = true, value_name = "USER_ID")]
    pub actor: Option<String>,

    /// Display name recorded alongside `--as`
    #[arg(long, global = true, requires = "actor")]
    pub actor_name: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            db: self.db.clone(),
            actor: self.actor.clone(),
            actor_name: self.actor_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use hrm_core::enums::{AccountKind, EntityType};

    use super::subcommands::AccountCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "hrm", "--format", "raw", "--limit", "10", "--verbose", "list", "kpi",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List(ref args) if args.entity == EntityType::Kpi));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hrm", "history", "--quiet", "--db", "/tmp/hrm.db"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.db.as_deref(), Some("/tmp/hrm.db"));
        assert!(matches!(cli.command, Commands::History(_)));
    }

    #[test]
    fn entity_names_accept_kebab_and_camel_case() {
        for value in ["job-posting", "jobPosting", "job_posting"] {
            let cli = Cli::try_parse_from(["hrm", "get", value, "j-1"]).expect("cli should parse");
            let Commands::Get(args) = cli.command else {
                panic!("expected get");
            };
            assert_eq!(args.entity, EntityType::JobPosting);
            assert_eq!(args.id, "j-1");
        }
    }

    #[test]
    fn unknown_entity_is_rejected() {
        assert!(Cli::try_parse_from(["hrm", "list", "invoice"]).is_err());
    }

    #[test]
    fn create_requires_data() {
        assert!(Cli::try_parse_from(["hrm", "create", "faq"]).is_err());
        let cli = Cli::try_parse_from(["hrm", "create", "faq", "--data", "{}"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["hrm", "--format", "xml", "list", "faq"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn actor_name_requires_actor() {
        assert!(Cli::try_parse_from(["hrm", "--actor-name", "Sora", "list", "faq"]).is_err());
        let cli = Cli::try_parse_from(["hrm", "--as", "u-1", "--actor-name", "Sora", "list", "faq"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.actor.as_deref(), Some("u-1"));
        assert_eq!(flags.actor_name.as_deref(), Some("Sora"));
    }

    #[test]
    fn account_kind_parses() {
        let cli = Cli::try_parse_from([
            "hrm", "account", "list", "--kind", "admin",
        ])
        .expect("cli should parse");
        let Commands::Account { action } = cli.command else {
            panic!("expected account");
        };
        assert!(matches!(action, AccountCommands::List { kind } if AccountKind::from(kind) == AccountKind::Admin));
    }
}
