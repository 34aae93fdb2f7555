use crate::connectors::CompletionConfig;
use serde;

pub const DEFAULT_APP_HOST: &str = "127.0.0.1";
pub const DEFAULT_APP_PORT: u16 = 8000;

/// Credential for the completion service. Required at process start.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
/// PostgreSQL connection string. Required at process start.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub assistant: CompletionConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    // Connection string: postgres://<username>:<password>@<host>:<port>/<database_name>
    #[serde(skip)]
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_APP_HOST.to_string(),
            app_port: DEFAULT_APP_PORT,
            database: DatabaseSettings::default(),
            assistant: CompletionConfig::default(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            acquire_timeout_secs: 30,
        }
    }
}

fn required_env(name: &str) -> Result<String, config::ConfigError> {
    std::env::var(name).map_err(|_| config::ConfigError::NotFound(name.to_string()))
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let defaults = Settings::default();

    // `configuration.yaml` is optional, APP__ASSISTANT__MODEL style variables override it
    let settings = config::Config::builder()
        .set_default("app_host", defaults.app_host)?
        .set_default("app_port", i64::from(defaults.app_port))?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // Secrets never live in the configuration file
    config.database.url = required_env(DATABASE_URL_ENV)?;
    config.assistant.api_key = Some(required_env(API_KEY_ENV)?);

    Ok(config)
}
