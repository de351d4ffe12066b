use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, patch, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/api/tasks/:id",
            patch(handlers::edit_task).delete(handlers::delete_task),
        )
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
