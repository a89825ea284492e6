mod handlers;
mod routes;


use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::EntryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    pub content: Option<String>,
}

pub async fn serve(addr: String, state: Arc<AppState>) -> crate::Result<()> {
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::Error::Internal(e.to_string()))?;

    Ok(())
}
