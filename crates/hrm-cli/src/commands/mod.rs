pub mod account;
pub mod dispatch;
pub mod history;
pub mod record;
pub mod shared;
pub mod snapshots;

use hrm_core::enums::EntityType;
use hrm_core::errors::CoreError;

/// Lookup miss as a command failure: the message names the entity, the exit
/// code is non-zero.
pub fn not_found(entity_type: EntityType, id: &str) -> anyhow::Error {
    CoreError::NotFound {
        entity_type,
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
pub(crate) mod test_support {
    use hrm_config::HrmConfig;
    use hrm_db::service::HrmService;

    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    pub async fn test_context() -> AppContext {
        AppContext {
            service: HrmService::open_local(":memory:").await.unwrap(),
            config: HrmConfig::default(),
        }
    }

    pub fn test_flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            db: None,
            actor: None,
            actor_name: None,
        }
    }
}
