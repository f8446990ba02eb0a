//! Provider collection routes.

use crate::handlers::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn provider_routes(state: AppState) -> Router {
    Router::new()
        .route("/providers", get(list).post(create))
        .route("/providers/:id", put(update).delete(delete_handler))
        .with_state(state)
}
