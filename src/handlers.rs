use crate::errors::AppError;
use crate::models::{DashboardStats, EditTaskRequest, NewTaskRequest, Task, WeeklyBasis};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::{load_tasks, KeyValueStore};
use crate::tasks::{self, now_millis};
use crate::ui::{render_dashboard, render_editor};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use std::sync::Arc;

pub async fn index() -> Html<String> {
    Html(render_editor())
}

pub async fn dashboard() -> Html<String> {
    Html(render_dashboard())
}

/// Runs a store operation on the blocking pool; store I/O is synchronous file access.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&dyn KeyValueStore) -> T + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(AppError::internal)
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = with_store(&state, load_tasks).await?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let now_ms = now_millis();
    let _guard = state.write_lock.lock().await;
    let task = with_store(&state, move |store| {
        tasks::add(store, &payload.text, &payload.category, now_ms)
    })
    .await??;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EditTaskRequest>,
) -> Result<Json<Vec<Task>>, AppError> {
    let _guard = state.write_lock.lock().await;
    let tasks = with_store(&state, move |store| {
        tasks::edit(store, id, payload.text.as_deref())
    })
    .await??;
    Ok(Json(tasks))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Task>>, AppError> {
    let stamp = match state.weekly_basis {
        WeeklyBasis::Created => None,
        WeeklyBasis::Completion => Some(now_millis()),
    };
    let _guard = state.write_lock.lock().await;
    let tasks = with_store(&state, move |store| tasks::toggle(store, id, stamp)).await??;
    Ok(Json(tasks))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Task>>, AppError> {
    let _guard = state.write_lock.lock().await;
    let tasks = with_store(&state, move |store| tasks::delete(store, id)).await??;
    Ok(Json(tasks))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let basis = state.weekly_basis;
    let stats = with_store(&state, move |store| build_stats(&load_tasks(store), basis)).await?;
    Ok(Json(stats))
}
