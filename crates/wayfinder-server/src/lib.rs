//! HTTP server exposing the campus map

pub mod handlers;
pub mod router;

use std::sync::Arc;

use tracing::info;
use wayfinder_campus::CampusMap;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Shared state for all request handlers.
///
/// The map is built once at startup and never mutated, so a plain `Arc` is
/// enough: concurrent searches only read the graph.
pub struct ServerState {
    pub map: CampusMap,
}

impl ServerState {
    pub fn new(map: CampusMap) -> Self {
        ServerState { map }
    }
}

/// The Wayfinder HTTP server
pub struct WayfinderServer {
    state: Arc<ServerState>,
    config: ServerConfig,
}

impl WayfinderServer {
    pub fn new(map: CampusMap, config: ServerConfig) -> Self {
        WayfinderServer {
            state: Arc::new(ServerState::new(map)),
            config,
        }
    }

    pub fn state(&self) -> Arc<ServerState> {
        Arc::clone(&self.state)
    }

    /// Bind and serve until shutdown.
    pub async fn start(self) -> anyhow::Result<()> {
        let app = router::create_router(self.state);
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Listening on http://{}", listener.local_addr()?);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
