use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/initial", get(handlers::get_initial))
        .route("/api/tasks", post(handlers::add_task))
        .route(
            "/api/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .route("/api/logs/toggle", post(handlers::toggle_log))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/order", put(handlers::put_order))
        .with_state(state)
}
