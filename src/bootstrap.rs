//! Startup sequence: ensure database, connect, apply the static DDL.
//! Every step must succeed before the router is served.

use crate::config::ServiceConfig;
use crate::error::BootstrapError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};
use std::path::Path;

const MAINTENANCE_DB: &str = "postgres";
const DUPLICATE_DATABASE: &str = "42P04";

fn config_err(e: crate::error::ConfigError) -> BootstrapError {
    BootstrapError::Connect(sqlx::Error::Configuration(Box::new(e)))
}

/// Create the configured database if it does not exist. Connects to the
/// maintenance database `postgres` to check `pg_database` and issue CREATE DATABASE.
pub async fn ensure_database_exists(config: &ServiceConfig) -> Result<(), BootstrapError> {
    let db_name = config.database_name().map_err(config_err)?;
    if db_name.is_empty() || db_name == MAINTENANCE_DB {
        return Ok(());
    }
    let opts = config
        .connect_options()
        .map_err(config_err)?
        .database(MAINTENANCE_DB);
    let mut conn = opts.connect().await.map_err(BootstrapError::Connect)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(BootstrapError::Connect)?;
    if exists.0 {
        tracing::info!(database = %db_name, "database already exists");
        return Ok(());
    }
    match sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
        .execute(&mut conn)
        .await
    {
        Ok(_) => {
            tracing::info!(database = %db_name, "database created");
            Ok(())
        }
        // Lost a race with another instance creating the same database.
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(DUPLICATE_DATABASE) => {
            tracing::info!(database = %db_name, "database already exists");
            Ok(())
        }
        Err(source) => Err(BootstrapError::CreateDatabase { name: db_name, source }),
    }
}

/// Pool bound to the target database.
pub async fn connect(config: &ServiceConfig) -> Result<PgPool, BootstrapError> {
    let opts = config.connect_options().map_err(config_err)?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await
        .map_err(BootstrapError::Connect)?;
    Ok(pool)
}

pub async fn load_schema(path: &Path) -> Result<String, BootstrapError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BootstrapError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Run the DDL text as-is. It may hold several statements; each must be
/// written with IF NOT EXISTS so re-running is a no-op.
pub async fn apply_schema(pool: &PgPool, ddl: &str) -> Result<(), BootstrapError> {
    sqlx::raw_sql(ddl)
        .execute(pool)
        .await
        .map_err(BootstrapError::SchemaApply)?;
    Ok(())
}

/// Full startup sequence. Returns the pool the handlers will share.
pub async fn bootstrap(config: &ServiceConfig) -> Result<PgPool, BootstrapError> {
    if config.create_database {
        ensure_database_exists(config).await?;
    } else {
        tracing::info!("database creation disabled; using pre-provisioned database");
    }
    let pool = connect(config).await?;
    tracing::info!("connected to storage");

    let ddl = load_schema(&config.schema_path).await?;
    apply_schema(&pool, &ddl).await?;
    tracing::info!(schema = %config.schema_path.display(), "schema applied");
    Ok(pool)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("orm_study_guide"), "\"orm_study_guide\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[tokio::test]
    async fn missing_schema_file_is_reported_with_path() {
        let err = load_schema(Path::new("does/not/exist.sql")).await.unwrap_err();
        match err {
            BootstrapError::SchemaRead { path, .. } => {
                assert_eq!(path, Path::new("does/not/exist.sql"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn bundled_schema_is_idempotent_ddl() {
        let ddl = load_schema(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/database.sql")))
            .await
            .unwrap();
        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS providers"));
    }
}
