use std::error::Error;
use std::sync::Arc;

use pet_records::config::{Config, DatabaseUrl};
use pet_records::http::{self, AppState};
use pet_records::{InMemoryRecordStore, RecordStore, SqliteRecordStore};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;
    let address = format!("0.0.0.0:{}", config.port);

    match &config.database_url {
        DatabaseUrl::Memory => {
            info!("Using in-memory record store");
            run(InMemoryRecordStore::new(), &address).await
        }
        DatabaseUrl::Sqlite(path) => {
            info!("Opening SQLite record store at {}", path.display());
            let store = SqliteRecordStore::open(path).map_err(|e| {
                error!("Could not connect to database: {e}");
                e
            })?;
            run(store, &address).await
        }
    }
}

async fn run<S: RecordStore + Clone + 'static>(
    store: S,
    address: &str,
) -> Result<(), Box<dyn Error>> {
    let state = Arc::new(AppState::new(store));
    http::serve(state, address).await?;
    info!("Server shut down");
    Ok(())
}
