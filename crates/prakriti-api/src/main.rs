use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use prakriti_api::config::{ApiConfig, LogFormat};
use prakriti_api::router;
use prakriti_api::state::AppState;
use prakriti_storage::store::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .pretty()
            .init(),
    }

    let store: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileStore::open(dir.clone())?),
        None => {
            tracing::warn!("PRAKRITI_DATA_DIR not set, records are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %config.addr(), "prakriti-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
