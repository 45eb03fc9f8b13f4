use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/meditation", get(handlers::meditation))
        .route("/records", post(handlers::submit_record))
        .route("/api/tracker", get(handlers::get_tracker))
        .route("/api/records", post(handlers::add_record))
        .with_state(state)
}
