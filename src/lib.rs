//! Provider service: validated CRUD over a single `providers` table.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use bootstrap::{apply_schema, bootstrap, connect, ensure_database_exists, load_schema};
pub use config::ServiceConfig;
pub use error::{AppError, BootstrapError, ConfigError, StoreError, ValidationError};
pub use model::{NewProvider, Provider, Service};
pub use routes::{app, common_routes_with_ready, provider_routes};
pub use state::AppState;
pub use store::{MemoryProviderStore, PgProviderStore, ProviderStore};
pub use validation::validate_provider;
