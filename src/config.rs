//! Service configuration from environment variables.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE: &str = "orm_study_guide";

/// Storage credentials and listener settings. Built once at startup.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// When set, overrides the discrete `DB_*` credentials.
    pub database_url: Option<String>,
    pub schema_path: PathBuf,
    /// `false` connects straight to a pre-provisioned database.
    pub create_database: bool,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            db_host: "localhost".into(),
            db_port: 5432,
            db_user: "postgres".into(),
            db_password: String::new(),
            db_name: DEFAULT_DATABASE.into(),
            database_url: None,
            schema_path: PathBuf::from("database.sql"),
            create_database: true,
            max_connections: 5,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = ServiceConfig::default();

        if let Some(v) = get("HOST") {
            cfg.host = v;
        }
        if let Some(v) = get("PORT") {
            cfg.port = parse("PORT", &v)?;
        }
        if let Some(v) = get("DB_HOST") {
            cfg.db_host = v;
        }
        if let Some(v) = get("DB_PORT") {
            cfg.db_port = parse("DB_PORT", &v)?;
        }
        if let Some(v) = get("DB_USER") {
            cfg.db_user = v;
        }
        if let Some(v) = lookup("DB_PASSWORD") {
            cfg.db_password = v;
        }
        if let Some(v) = get("DB_NAME") {
            cfg.db_name = v;
        }
        cfg.database_url = get("DATABASE_URL");
        if let Some(v) = get("SCHEMA_PATH") {
            cfg.schema_path = PathBuf::from(v);
        }
        if let Some(v) = get("CREATE_DATABASE") {
            cfg.create_database = parse_bool("CREATE_DATABASE", &v)?;
        }
        if let Some(v) = get("DB_MAX_CONNECTIONS") {
            cfg.max_connections = parse("DB_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = get("MAX_BODY_BYTES") {
            cfg.max_body_bytes = parse("MAX_BODY_BYTES", &v)?;
        }
        Ok(cfg)
    }

    /// Connect options for the target database.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.database_url {
            Some(url) => PgConnectOptions::from_str(url).map_err(|_| ConfigError::Invalid {
                key: "DATABASE_URL",
                value: url.clone(),
            }),
            None => Ok(PgConnectOptions::new()
                .host(&self.db_host)
                .port(self.db_port)
                .username(&self.db_user)
                .password(&self.db_password)
                .database(&self.db_name)),
        }
    }

    /// Name of the database bootstrap creates and the pool connects to.
    pub fn database_name(&self) -> Result<String, ConfigError> {
        let opts = self.connect_options()?;
        Ok(opts
            .get_database()
            .map(str::to_string)
            .unwrap_or_else(|| self.db_name.clone()))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
