//! Postgres integration tests. Skipped unless DATABASE_URL is set.

use provider_service::{
    apply_schema, bootstrap, NewProvider, PgProviderStore, ProviderStore, Service, ServiceConfig,
};
use std::path::PathBuf;
use tokio::sync::Mutex;

// Concurrent CREATE TABLE IF NOT EXISTS can still collide in the catalog.
static SERIAL: Mutex<()> = Mutex::const_new(());

fn config() -> Option<ServiceConfig> {
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(ServiceConfig {
        database_url: Some(url),
        schema_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/database.sql")),
        ..ServiceConfig::default()
    })
}

#[tokio::test]
async fn bootstrap_twice_succeeds() {
    let Some(cfg) = config() else {
        eprintln!("DATABASE_URL missing; skipping");
        return;
    };
    let _guard = SERIAL.lock().await;
    let first = bootstrap(&cfg).await.expect("first bootstrap");
    let second = bootstrap(&cfg).await.expect("second bootstrap");
    let ddl = std::fs::read_to_string(&cfg.schema_path).unwrap();
    apply_schema(&first, &ddl).await.expect("reapply schema");
    first.close().await;
    second.close().await;
}

#[tokio::test]
async fn pg_store_round_trip() {
    let Some(cfg) = config() else {
        eprintln!("DATABASE_URL missing; skipping");
        return;
    };
    let _guard = SERIAL.lock().await;
    let pool = bootstrap(&cfg).await.expect("bootstrap");
    let store = PgProviderStore::new(pool);

    let row = store
        .insert(&NewProvider {
            name: "Alice".into(),
            service: Service::Doctor,
        })
        .await
        .unwrap();
    assert!(row.id > 0);
    assert!(store.list().await.unwrap().iter().any(|p| p.id == row.id));

    let changed = NewProvider {
        name: "Alicia".into(),
        service: Service::Nurse,
    };
    assert_eq!(store.update(row.id, &changed).await.unwrap(), 1);
    let listed = store.list().await.unwrap();
    let found = listed.iter().find(|p| p.id == row.id).unwrap();
    assert_eq!(found.name, "Alicia");
    assert_eq!(found.service, Service::Nurse);

    assert_eq!(store.delete(row.id).await.unwrap(), 1);
    assert_eq!(store.delete(row.id).await.unwrap(), 0);
    assert_eq!(store.update(row.id, &changed).await.unwrap(), 0);
    store.ping().await.unwrap();
}
