use serde::{Deserialize, Serialize};

/// Persistence settings (see `database` table in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL.
    /// TOML: `database.url`. Default: `sqlite://warehouse.db`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Insert the three demo widgets and gadgets at startup when the ids are free.
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            seed_demo_data: false,
        }
    }
}

fn default_url() -> String {
    "sqlite://warehouse.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    5
}
