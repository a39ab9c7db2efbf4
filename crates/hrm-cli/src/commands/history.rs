use hrm_core::entities::AuditEntry;
use hrm_core::enums::AuditAction;
use hrm_db::repos::AuditFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_entity_type, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `hrm history`.
pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = fetch(args, ctx, flags).await?;
    output(&entries, flags.format)
}

pub async fn fetch(
    args: &HistoryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<AuditEntry>> {
    let filter = AuditFilter {
        entity_id: args.entity_id.clone(),
        entity_type: args
            .entity_type
            .as_deref()
            .map(parse_entity_type)
            .transpose()
            .map_err(anyhow::Error::msg)?,
        action: args
            .action
            .as_deref()
            .map(|value| parse_enum::<AuditAction>(value, "action"))
            .transpose()?,
        limit: effective_limit(flags.limit, ctx.config.general.default_limit),
    };

    ctx.service.query_audit(&filter).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use hrm_core::entities::FaqDraft;
    use hrm_core::enums::EntityType;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support::{test_context, test_flags};

    fn args() -> HistoryArgs {
        HistoryArgs {
            entity_id: None,
            entity_type: None,
            action: None,
        }
    }

    async fn seed(ctx: &AppContext, n: usize) {
        for i in 0..n {
            ctx.service
                .faqs()
                .create(&FaqDraft {
                    question: format!("q{i}"),
                    answer: "a".into(),
                    ..FaqDraft::default()
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn configured_default_limit_applies() {
        let mut ctx = test_context().await;
        ctx.config.general.default_limit = 2;
        seed(&ctx, 3).await;

        let entries = fetch(&args(), &ctx, &test_flags()).await.unwrap();
        assert_eq!(entries.len(), 2);

        let unlimited = GlobalFlags {
            limit: Some(0),
            ..test_flags()
        };
        let all = fetch(&args(), &ctx, &unlimited).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn filters_parse_cli_spellings() {
        let ctx = test_context().await;
        seed(&ctx, 1).await;

        let entries = fetch(
            &HistoryArgs {
                entity_type: Some("faq".into()),
                action: Some("create".into()),
                ..args()
            },
            &ctx,
            &test_flags(),
        )
        .await
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Faq);

        let none = fetch(
            &HistoryArgs {
                entity_type: Some("job-posting".into()),
                ..args()
            },
            &ctx,
            &test_flags(),
        )
        .await
        .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn invalid_action_is_rejected() {
        let ctx = test_context().await;
        let err = fetch(
            &HistoryArgs {
                action: Some("upsert".into()),
                ..args()
            },
            &ctx,
            &test_flags(),
        )
        .await
        .expect_err("upsert is not an audit action");
        assert!(err.to_string().contains("invalid action"));
    }
}
