use hrm_core::enums::EntityType;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnapshotsArgs;
use crate::commands::not_found;
use crate::commands::shared::limit::truncate;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hrm snapshots <kpi-id>`. An unknown KPI is an error, a KPI with no
/// snapshots prints an empty list.
pub async fn handle(args: &SnapshotsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.service.kpis().get(&args.kpi_id).await?.is_none() {
        return Err(not_found(EntityType::Kpi, &args.kpi_id));
    }
    let snapshots = ctx.service.snapshots_for_kpi(&args.kpi_id).await?;
    output(&truncate(snapshots, flags.limit), flags.format)
}
