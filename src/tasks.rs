//! Task mutations.
//!
//! The `*_task` functions are pure edits of an in-memory list. The wrappers
//! below them run one full read-modify-write round trip against a store each:
//! the list is re-read at the start and written back whole at the end.

use crate::errors::TaskError;
use crate::models::Task;
use crate::storage::{load_tasks, save_tasks, KeyValueStore};
use chrono::Utc;
use tracing::{debug, info};

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Appends a new pending task stamped with `now_ms`.
///
/// Text is stored as given; only whitespace-only input is rejected.
pub fn add_task(
    tasks: &mut Vec<Task>,
    text: &str,
    category: &str,
    now_ms: i64,
) -> Result<Task, TaskError> {
    if is_blank(text) {
        return Err(TaskError::EmptyText);
    }
    let task = Task::new(now_ms, text, category);
    tasks.push(task.clone());
    Ok(task)
}

/// Removes every task with `id`, returning how many were removed.
pub fn delete_task(tasks: &mut Vec<Task>, id: i64) -> usize {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    before - tasks.len()
}

/// Replaces the text of tasks matching `id`.
///
/// `None` is a cancelled edit and changes nothing. An empty string is rejected.
pub fn edit_task(tasks: &mut [Task], id: i64, text: Option<&str>) -> Result<usize, TaskError> {
    let Some(text) = text else {
        return Ok(0);
    };
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }

    let mut changed = 0;
    for task in tasks.iter_mut().filter(|task| task.id == id) {
        task.text = text.to_string();
        changed += 1;
    }
    Ok(changed)
}

/// Flips `completed` on tasks matching `id`.
///
/// With a `stamp`, a task that becomes completed records it as `completed_at`
/// and one that becomes pending loses it. Without one, `completed_at` is left
/// as stored.
pub fn toggle_complete(tasks: &mut [Task], id: i64, stamp: Option<i64>) -> usize {
    let mut changed = 0;
    for task in tasks.iter_mut().filter(|task| task.id == id) {
        task.completed = !task.completed;
        if let Some(stamp) = stamp {
            task.completed_at = task.completed.then_some(stamp);
        }
        changed += 1;
    }
    changed
}

pub fn add(
    store: &dyn KeyValueStore,
    text: &str,
    category: &str,
    now_ms: i64,
) -> Result<Task, TaskError> {
    let mut tasks = load_tasks(store);
    let task = match add_task(&mut tasks, text, category, now_ms) {
        Ok(task) => task,
        Err(err) => {
            debug!("rejected task with empty text");
            return Err(err);
        }
    };
    save_tasks(store, &tasks)?;
    info!(id = task.id, category = %task.category, "task added");
    Ok(task)
}

pub fn delete(store: &dyn KeyValueStore, id: i64) -> Result<Vec<Task>, TaskError> {
    let mut tasks = load_tasks(store);
    let removed = delete_task(&mut tasks, id);
    save_tasks(store, &tasks)?;
    info!(id, removed, "task deleted");
    Ok(tasks)
}

pub fn edit(
    store: &dyn KeyValueStore,
    id: i64,
    text: Option<&str>,
) -> Result<Vec<Task>, TaskError> {
    if text.is_none() {
        debug!(id, "edit cancelled");
        return Ok(load_tasks(store));
    }
    let mut tasks = load_tasks(store);
    let changed = match edit_task(&mut tasks, id, text) {
        Ok(changed) => changed,
        Err(err) => {
            debug!(id, "rejected edit with empty text");
            return Err(err);
        }
    };
    save_tasks(store, &tasks)?;
    info!(id, changed, "task edited");
    Ok(tasks)
}

pub fn toggle(
    store: &dyn KeyValueStore,
    id: i64,
    stamp: Option<i64>,
) -> Result<Vec<Task>, TaskError> {
    let mut tasks = load_tasks(store);
    let changed = toggle_complete(&mut tasks, id, stamp);
    save_tasks(store, &tasks)?;
    info!(id, changed, "task toggled");
    Ok(tasks)
}
