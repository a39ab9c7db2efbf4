use clap::{Subcommand, ValueEnum};
use hrm_core::enums::AccountKind;

/// Credential table selector.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    User,
    Admin,
}

impl From<KindArg> for AccountKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::User => Self::User,
            KindArg::Admin => Self::Admin,
        }
    }
}

/// Account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AccountCommands {
    /// Create an account. The password is stored salted and hashed.
    Create {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// List accounts, newest first.
    List {
        #[arg(long, value_enum)]
        kind: KindArg,
    },
    /// Get an account by ID.
    Get {
        #[arg(long, value_enum)]
        kind: KindArg,
        id: String,
    },
    /// Check an email/password pair.
    Login {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Change an account's password.
    Passwd {
        #[arg(long, value_enum)]
        kind: KindArg,
        id: String,
        #[arg(long)]
        password: String,
    },
    /// Delete an account.
    Delete {
        #[arg(long, value_enum)]
        kind: KindArg,
        id: String,
    },
}
