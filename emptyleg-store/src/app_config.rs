use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            name: None,
        }
    }
}

fn default_database_url() -> String {
    "postgres://localhost:5432/emptyleg".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of EMPTYLEG)
            .add_source(config::Environment::with_prefix("EMPTYLEG").separator("__"))
            .build()?;

        let mut cfg: Config = s.try_deserialize()?;

        // Bare variable names take precedence over the layered sources.
        if let Ok(url) = env::var("DATABASE_URL") {
            cfg.database.url = url;
        }
        if let Ok(name) = env::var("DATABASE_NAME") {
            cfg.database.name = Some(name);
        }
        if let Ok(port) = env::var("PORT") {
            if let Ok(port) = port.parse() {
                cfg.server.port = port;
            }
        }

        Ok(cfg)
    }

    /// Whether a connection string was explicitly configured, as opposed to
    /// the compiled-in default.
    pub fn database_url_configured() -> bool {
        env::var("DATABASE_URL").is_ok() || env::var("EMPTYLEG__DATABASE__URL").is_ok()
    }
}
