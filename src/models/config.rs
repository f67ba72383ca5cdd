use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options of the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Page size used when a listing does not ask for one.
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,
}

fn default_per_page() -> usize {
    10
}

impl ServerConfig {
    /// Reads `config/default.yaml` when present, then `APP_*` environment
    /// variables on top of it.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
