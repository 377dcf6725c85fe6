//! # foody-stub - Food review API stub
//!
//! An axum implementation of the Food review service contract exercised by the
//! `foody` suite. It lets the suite run end to end without the remote host.
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern | Success |
//! |------------|-------------|-------------|---------|
//! | login | POST | `/api/User/Authentication` | 200 |
//! | create | POST | `/api/Food/Create` | 201 |
//! | edit | PATCH | `/api/Food/Edit/{id}` | 200 |
//! | list | GET | `/api/Food/All` | 200 |
//! | delete | DELETE | `/api/Food/Delete/{id}` | 200 |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"msg": "..."}` with these status codes:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Blank `Name`/`Description`, invalid JSON Patch, delete of an unknown id |
//! | 401 | Missing or unknown bearer token, bad credentials |
//! | 404 | Edit of an unknown id |
//!
//! Editing and deleting an unknown id answer differently (404 vs 400). That is
//! the behavior of the production service and is kept on purpose.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foody_stub::{StubConfig, StubServer};
//!
//! # async fn example() -> std::io::Result<()> {
//! let server = StubServer::start(StubConfig::for_testing()).await?;
//! println!("stub listening on {}", server.base_url());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routing;
pub mod state;
pub mod storage;

pub use config::StubConfig;
pub use error::{StorageError, StubError, StubResult};
pub use state::AppState;
pub use storage::{FoodStorage, InMemoryFoodStorage, StoredFood};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Creates the application with an in-memory store and default configuration.
pub fn create_app() -> Router {
    create_app_with_config(InMemoryFoodStorage::new(), StubConfig::default())
}

/// Creates the application with the given storage backend and configuration.
pub fn create_app_with_config<S>(storage: S, config: StubConfig) -> Router
where
    S: FoodStorage + 'static,
{
    create_app_with_storage(Arc::new(storage), config)
}

/// Creates the application around a storage backend the caller keeps a handle to.
pub fn create_app_with_storage<S>(storage: Arc<S>, config: StubConfig) -> Router
where
    S: FoodStorage + 'static,
{
    info!(
        "Creating Food API stub with backend: {}",
        storage.backend_name()
    );

    let timeout = Duration::from_secs(config.request_timeout);
    let state = AppState::new(storage, config);
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            timeout,
        ));

    router.layer(service_builder)
}

/// A stub server running on a background task.
///
/// The server stops when this value is dropped.
pub struct StubServer {
    addr: SocketAddr,
    storage: Arc<InMemoryFoodStorage>,
    config: StubConfig,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Binds `config.socket_addr()` and starts serving in the background.
    ///
    /// Use port 0 to let the OS pick a free port.
    pub async fn start(config: StubConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind(config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        let storage = Arc::new(InMemoryFoodStorage::new());
        let app = create_app_with_storage(Arc::clone(&storage), config.clone());

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!(error = %e, "Stub server stopped");
            }
        });
        info!(address = %addr, "Stub server listening");

        Ok(Self {
            addr,
            storage,
            config,
            handle,
        })
    }

    /// Returns the bound socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the base URL clients should target.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns the backing store.
    pub fn storage(&self) -> &InMemoryFoodStorage {
        &self.storage
    }

    /// Returns the configuration the server was started with.
    pub fn config(&self) -> &StubConfig {
        &self.config
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("foody_stub={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
