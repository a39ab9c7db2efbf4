use anyhow::bail;
use hrm_core::entities::{
    Company, Competitor, Faq, JobPosting, Kpi, KpiSnapshot, Organization, SelectionStep,
};
use hrm_core::enums::EntityType;
use hrm_db::schema::Entity;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::cli::GlobalFlags;
use crate::commands::not_found;
use crate::commands::shared::limit::truncate;
use crate::commands::shared::parse::parse_body;
use crate::context::AppContext;
use crate::output::output;

/// One CRUD operation against a record type chosen at runtime.
#[derive(Debug)]
pub enum RecordAction<'a> {
    List,
    Get(&'a str),
    Create(Value),
    Update(&'a str, Value),
    Delete(&'a str),
}

/// Handle `hrm list|get|create|update|delete <entity>`.
pub async fn handle(
    entity: EntityType,
    action: RecordAction<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match entity {
        EntityType::Company => run::<Company>(entity, action, ctx, flags).await,
        EntityType::Kpi => run::<Kpi>(entity, action, ctx, flags).await,
        EntityType::KpiSnapshot => run::<KpiSnapshot>(entity, action, ctx, flags).await,
        EntityType::JobPosting => run::<JobPosting>(entity, action, ctx, flags).await,
        EntityType::Organization => run::<Organization>(entity, action, ctx, flags).await,
        EntityType::Competitor => run::<Competitor>(entity, action, ctx, flags).await,
        EntityType::Faq => run::<Faq>(entity, action, ctx, flags).await,
        EntityType::SelectionStep => run::<SelectionStep>(entity, action, ctx, flags).await,
        EntityType::User | EntityType::Admin => {
            bail!("{entity} records are managed with `hrm account`")
        }
    }
}

async fn run<E>(
    entity: EntityType,
    action: RecordAction<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    E: Entity,
    E::Draft: DeserializeOwned,
    E::Patch: DeserializeOwned,
{
    let repo = ctx.service.repo::<E>();
    debug!(%entity, ?action, "record command");
    match action {
        RecordAction::List => {
            let records = truncate(repo.all().await?, flags.limit);
            output(&records, flags.format)
        }
        RecordAction::Get(id) => {
            let record = repo.get(id).await?.ok_or_else(|| not_found(entity, id))?;
            output(&record, flags.format)
        }
        RecordAction::Create(body) => {
            let draft: E::Draft = parse_body(body, entity)?;
            let created = repo.create(&draft).await?;
            output(&created, flags.format)
        }
        RecordAction::Update(id, body) => {
            let patch: E::Patch = parse_body(body, entity)?;
            let updated = repo
                .update(id, &patch)
                .await?
                .ok_or_else(|| not_found(entity, id))?;
            output(&updated, flags.format)
        }
        RecordAction::Delete(id) => {
            if !repo.delete(id).await? {
                return Err(not_found(entity, id));
            }
            output(&json!({"id": id, "deleted": true}), flags.format)
        }
    }
}
