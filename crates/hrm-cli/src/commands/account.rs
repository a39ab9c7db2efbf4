use anyhow::bail;
use hrm_core::entities::NewAccount;
use hrm_core::enums::AccountKind;
use hrm_db::updates::AccountUpdate;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AccountCommands;
use crate::commands::not_found;
use crate::commands::shared::limit::truncate;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hrm account`.
pub async fn handle(
    action: &AccountCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        AccountCommands::Create {
            kind,
            email,
            name,
            password,
        } => {
            let account = svc
                .create_account(
                    AccountKind::from(*kind),
                    &NewAccount {
                        email: email.clone(),
                        name: name.clone(),
                        password: password.clone(),
                    },
                )
                .await?;
            output(&account, flags.format)
        }
        AccountCommands::List { kind } => {
            let accounts = svc.list_accounts(AccountKind::from(*kind)).await?;
            output(&truncate(accounts, flags.limit), flags.format)
        }
        AccountCommands::Get { kind, id } => {
            let kind = AccountKind::from(*kind);
            let account = svc
                .get_account(kind, id)
                .await?
                .ok_or_else(|| not_found(kind.entity_type(), id))?;
            output(&account, flags.format)
        }
        AccountCommands::Login {
            kind,
            email,
            password,
        } => {
            let Some(account) = svc
                .verify_login(AccountKind::from(*kind), email, password)
                .await?
            else {
                bail!("invalid email or password");
            };
            output(&json!({"authenticated": true, "account": account}), flags.format)
        }
        AccountCommands::Passwd { kind, id, password } => {
            let kind = AccountKind::from(*kind);
            let update = AccountUpdate {
                password: Some(password.clone()),
                ..AccountUpdate::default()
            };
            let account = svc
                .update_account(kind, id, &update)
                .await?
                .ok_or_else(|| not_found(kind.entity_type(), id))?;
            output(&account, flags.format)
        }
        AccountCommands::Delete { kind, id } => {
            let kind = AccountKind::from(*kind);
            if !svc.delete_account(kind, id).await? {
                return Err(not_found(kind.entity_type(), id));
            }
            output(&json!({"id": id, "deleted": true}), flags.format)
        }
    }
}
