use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use super::{handlers, AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(handlers::home).post(handlers::submit_entry))
}
