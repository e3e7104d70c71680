use std::{collections::HashSet, path::Path, time::Duration};

use config::{Config, Environment, File, FileFormat};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sso_core::{App, AppId};
use thiserror::Error;

use super::constants::{DEFAULT_CONFIG_PATH, defaults, env, limits};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Process settings, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_env")]
    pub env: String,
    pub token_ttl_in_seconds: u64,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub hashing: HashingSettings,
    #[serde(default)]
    pub apps: Vec<AppSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_http_address")]
    pub address: String,
    #[serde(default = "default_http_timeout")]
    pub timeout_in_millis: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            address: default_http_address(),
            timeout_in_millis: default_http_timeout(),
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageSettings {
    #[default]
    InMemory,
    Postgres {
        url: Secret<String>,
        #[serde(default = "default_max_connections")]
        max_connections: u32,
    },
}

/// Argon2id work factor. Raising any value makes every hash slower to
/// compute and to brute-force.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HashingSettings {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

/// An application provisioned into the credential store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub id: i32,
    pub name: String,
    pub secret: Secret<String>,
}

impl From<&AppSettings> for App {
    fn from(settings: &AppSettings) -> Self {
        App::new(
            AppId::new(settings.id),
            settings.name.clone(),
            settings.secret.clone(),
        )
    }
}

impl Settings {
    /// Load settings from the file named by `CONFIG_PATH` (or the default
    /// path), with `SSO__`-prefixed environment variables taking precedence.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let path = std::env::var(env::CONFIG_PATH_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());

        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::Invalid(format!(
                "config file does not exist: {}",
                path.display()
            )));
        }

        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json))
            .add_source(environment())
            .build()?;

        Self::finish(config)
    }

    /// Parse settings from a JSON document. Environment overrides still apply.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .add_source(environment())
            .build()?;

        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.token_ttl_in_seconds == 0 {
            return Err(SettingsError::Invalid(
                "token_ttl_in_seconds must be positive".to_owned(),
            ));
        }

        if self.token_ttl_in_seconds > limits::MAX_TOKEN_TTL_IN_SECONDS {
            return Err(SettingsError::Invalid(format!(
                "token_ttl_in_seconds must not exceed {}",
                limits::MAX_TOKEN_TTL_IN_SECONDS
            )));
        }

        if self.http.timeout_in_millis == 0 {
            return Err(SettingsError::Invalid(
                "http.timeout_in_millis must be positive".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for app in &self.apps {
            if app.id == 0 {
                return Err(SettingsError::Invalid("app id 0 is reserved".to_owned()));
            }
            if !seen.insert(app.id) {
                return Err(SettingsError::Invalid(format!("duplicate app id {}", app.id)));
            }
            if app.secret.expose_secret().is_empty() {
                return Err(SettingsError::Invalid(format!(
                    "app {} has an empty secret",
                    app.id
                )));
            }
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_in_seconds)
    }

    pub fn apps(&self) -> impl Iterator<Item = App> + '_ {
        self.apps.iter().map(App::from)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX)
        .prefix_separator(env::ENV_SEPARATOR)
        .separator(env::ENV_SEPARATOR)
        .try_parsing(true)
}

fn default_env() -> String {
    defaults::ENV.to_owned()
}

fn default_http_address() -> String {
    defaults::HTTP_ADDRESS.to_owned()
}

fn default_http_timeout() -> u64 {
    defaults::HTTP_TIMEOUT_IN_MILLIS
}

fn default_max_connections() -> u32 {
    defaults::POSTGRES_MAX_CONNECTIONS
}

fn default_memory_kib() -> u32 {
    defaults::HASHING_MEMORY_KIB
}

fn default_iterations() -> u32 {
    defaults::HASHING_ITERATIONS
}

fn default_parallelism() -> u32 {
    defaults::HASHING_PARALLELISM
}
