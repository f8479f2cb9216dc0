mod basic;
mod database;

pub use basic::BasicConfig;
pub use database::DatabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Persistence settings (see `database` table in config.toml).
    #[serde(default)]
    pub database: DatabaseConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "WAREHOUSE_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file and
    /// `WAREHOUSE_`-prefixed environment variables (`WAREHOUSE_DATABASE__URL`).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts the effective configuration.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::net::Ipv4Addr;

    #[test]
    fn defaults_are_usable_without_any_source() {
        let cfg: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .extract()
            .unwrap();

        assert_eq!(cfg.basic.listen_addr, Ipv4Addr::UNSPECIFIED);
        assert_eq!(cfg.basic.listen_port, 8080);
        assert_eq!(cfg.basic.loglevel, "info");
        assert_eq!(cfg.database.url, "sqlite://warehouse.db");
        assert_eq!(cfg.database.max_connections, 8);
        assert!(!cfg.database.seed_demo_data);
    }

    #[test]
    fn toml_overrides_only_the_keys_it_names() {
        let cfg: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                r#"
                [basic]
                listen_port = 9000

                [database]
                url = "sqlite::memory:"
                seed_demo_data = true
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(cfg.basic.listen_port, 9000);
        assert_eq!(cfg.basic.loglevel, "info");
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert!(cfg.database.seed_demo_data);
        assert_eq!(cfg.database.busy_timeout_secs, 5);
    }

    #[test]
    fn env_vars_override_file_and_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                [basic]
                listen_port = 9000
                loglevel = "debug"
                "#,
            )?;
            jail.set_env("WAREHOUSE_DATABASE__URL", "sqlite::memory:");
            jail.set_env("WAREHOUSE_BASIC__LISTEN_PORT", "9123");

            let cfg = Config::load()?;
            assert_eq!(cfg.database.url, "sqlite::memory:");
            assert_eq!(cfg.basic.listen_port, 9123);
            assert_eq!(cfg.basic.loglevel, "debug");
            assert_eq!(cfg.database.max_connections, 8);
            Ok(())
        });
    }
}
