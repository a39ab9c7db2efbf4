use anyhow::Context;
use hrm_config::{DatabaseConfig, HrmConfig};
use hrm_core::entities::Actor;
use hrm_db::service::HrmService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: HrmService,
    pub config: HrmConfig,
}

impl AppContext {
    /// Open the configured database and bind the acting user, if any.
    pub async fn init(config: HrmConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let service = HrmService::open(&config.database)
            .await
            .context("failed to initialize hrm-db service")?;
        let service = match actor_from(flags) {
            Some(actor) => service.acting_as(actor),
            None => service,
        };
        Ok(Self { service, config })
    }
}

/// Load layered configuration and apply the `--db` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HrmConfig> {
    let config = HrmConfig::load_with_dotenv().context("failed to load configuration")?;
    Ok(apply_db_override(config, flags.db.as_deref()))
}

fn apply_db_override(mut config: HrmConfig, db: Option<&str>) -> HrmConfig {
    if let Some(path) = db {
        config.database = DatabaseConfig {
            path: path.to_string(),
            ..DatabaseConfig::default()
        };
    }
    config
}

fn actor_from(flags: &GlobalFlags) -> Option<Actor> {
    let user_id = flags.actor.as_deref()?;
    let actor = Actor::new(user_id);
    Some(match flags.actor_name.as_deref() {
        Some(name) => actor.named(name),
        None => actor,
    })
}
