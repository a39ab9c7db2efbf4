use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::record::RecordAction;
use crate::commands::shared::parse::read_json_body;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => {
            commands::record::handle(args.entity, RecordAction::List, ctx, flags).await
        }
        Commands::Get(args) => {
            commands::record::handle(args.entity, RecordAction::Get(&args.id), ctx, flags).await
        }
        Commands::Create(args) => {
            let body = read_json_body(&args.data)?;
            commands::record::handle(args.entity, RecordAction::Create(body), ctx, flags).await
        }
        Commands::Update(args) => {
            let body = read_json_body(&args.data)?;
            let action = RecordAction::Update(&args.id, body);
            commands::record::handle(args.entity, action, ctx, flags).await
        }
        Commands::Delete(args) => {
            commands::record::handle(args.entity, RecordAction::Delete(&args.id), ctx, flags).await
        }
        Commands::Snapshots(args) => commands::snapshots::handle(&args, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags).await,
        Commands::Account { action } => commands::account::handle(&action, ctx, flags).await,
    }
}
