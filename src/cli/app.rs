//! Server application for ecobloom
//!
//! Wires the file-backed store, the catalog and the HTTP router together and
//! runs them until Ctrl-C.
use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

use crate::{router, Config, FilePlantStore, PlantCatalog, PlantStore, Result, SystemClock};

/// Server application - owns the resolved configuration
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Seed the store if needed, then serve until shutdown
    pub async fn run(&self) -> Result<()> {
        let store = FilePlantStore::new(&self.config.data_file);
        if store.initialize()? {
            info!(
                "Created plant document at {}",
                self.config.data_file.display()
            );
        } else {
            info!(
                "Using existing plant document at {}",
                self.config.data_file.display()
            );
        }

        let catalog = Arc::new(PlantCatalog::new(Box::new(store), Box::new(SystemClock)));
        let app = router(catalog);

        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address).await?;
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
