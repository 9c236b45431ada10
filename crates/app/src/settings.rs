//! Handles settings for the application.
//!
//! Settings are read from a TOML file (`settings.toml` unless `--config`
//! says otherwise) and then overridden by `BREB__`-prefixed environment
//! variables, e.g. `BREB__SERVER__PORT=8080`.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            database: Database::Memory,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Transfers {
    /// Serialize transfers sharing an account inside the process.
    pub serialize: bool,
    /// Reject non-positive amounts and self-transfers.
    pub validate: bool,
}

impl Default for Transfers {
    fn default() -> Self {
        Self {
            serialize: true,
            validate: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub transfers: Transfers,
}

#[derive(Debug, Parser)]
#[command(name = "breb", version)]
struct Args {
    /// Settings file path (TOML, extension optional).
    #[arg(long, env = "BREB_CONFIG")]
    config: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        Self::load(config_path)
    }

    fn load(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("BREB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load("does/not/exist").unwrap();

        assert_eq!(settings.server.port, 3000);
        assert!(matches!(settings.server.database, Database::Memory));
        assert!(settings.transfers.serialize);
        assert!(settings.transfers.validate);
    }

    #[test]
    fn sqlite_database_is_a_table() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                port = 8080
                database = { sqlite = "breb.db" }

                [transfers]
                validate = false
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert!(matches!(settings.server.database, Database::Sqlite(ref path) if path == "breb.db"));
        assert!(!settings.transfers.validate);
        assert!(settings.transfers.serialize);
        assert_eq!(settings.app.level, "info");
    }
}
