//! HTTP/JSON surface of the component inventory.
//!
//! The router is built from an explicitly constructed [`ComponentStore`];
//! there is no process-wide state, so tests can build isolated routers.
//!
//! | Method + path | Success |
//! |---|---|
//! | `GET /components` | 200, array of components |
//! | `POST /components` | 201, created component |
//! | `GET /components/{id}` | 200, component |
//! | `PUT /components/{id}` | 200, replaced component |
//! | `DELETE /components/{id}` | 204, empty body |
//! | `GET /health` | 200, `{"status":"ok"}` |
//!
//! # Examples
//!
//! ```no_run
//! use inventory::{api, ComponentStore, DatabaseConfig};
//!
//! # async fn run() -> inventory::Result<()> {
//! let store = ComponentStore::open(DatabaseConfig::new("/tmp/components.db"))?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! api::serve(listener, store, std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

mod handlers;
mod response;
pub mod wire;

use std::future::Future;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::error::Result;
use crate::store::ComponentStore;

pub use wire::{ComponentBody, ComponentView, FieldViolationView};

/// Shared, immutable state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    store: ComponentStore,
}

/// Builds the API router around the given store.
pub fn router(store: ComponentStore) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/components",
            get(handlers::list_components).post(handlers::create_component),
        )
        .route(
            "/components/:id",
            get(handlers::get_component)
                .put(handlers::update_component)
                .delete(handlers::delete_component),
        )
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an I/O error if the server fails while accepting connections.
pub async fn serve<S>(listener: TcpListener, store: ComponentStore, shutdown: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("listening on http://{addr}");
    }
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    log::info!("server stopped");
    Ok(())
}
