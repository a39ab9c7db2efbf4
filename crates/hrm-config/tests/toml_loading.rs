//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use hrm_config::{HrmConfig, LOCAL_CONFIG_FILE};

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./data/hrm.db"
url = "libsql://hrm-acme.turso.io"
auth_token = "turso-token"
"#,
        )?;

        let config: HrmConfig = Figment::from(Serialized::defaults(HrmConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./data/hrm.db");
        assert_eq!(config.database.url, "libsql://hrm-acme.turso.io");
        assert_eq!(config.database.auth_token, "turso-token");
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 10
"#,
        )?;

        let config: HrmConfig = Figment::from(Serialized::defaults(HrmConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 10);
        assert_eq!(config.database.path, "hrm.db");
        assert!(!config.database.is_remote());
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("HRM_DATABASE__PATH", "from-env.db");

        let config: HrmConfig = Figment::from(Serialized::defaults(HrmConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HRM_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn load_picks_up_local_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[database]
path = "local.db"
"#,
        )?;

        let config = HrmConfig::load().expect("config loads");
        assert_eq!(config.database.path, "local.db");
        Ok(())
    });
}

#[test]
fn load_rejects_half_configured_remote() {
    Jail::expect_with(|jail| {
        jail.set_env("HRM_DATABASE__URL", "libsql://hrm-acme.turso.io");
        assert!(HrmConfig::load().is_err());
        Ok(())
    });
}
