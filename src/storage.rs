use crate::models::Task;
use serde_json::Value;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{error, warn};

/// Key the task list is persisted under.
pub const TASKS_KEY: &str = "tasks";

/// Minimal string key-value persistence port.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("memory store poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("memory store poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the task list. Never fails: missing or corrupt data reads as empty.
pub fn load_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    match store.get(TASKS_KEY) {
        Ok(Some(raw)) => parse_tasks(&raw),
        Ok(None) => Vec::new(),
        Err(err) => {
            error!("failed to read task store: {err}");
            Vec::new()
        }
    }
}

/// Parses a stored task list, dropping entries that are not well-formed tasks.
pub fn parse_tasks(raw: &str) -> Vec<Task> {
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(Value::Null) => return Vec::new(),
        Ok(_) => {
            warn!("task store does not hold an array, treating as empty");
            return Vec::new();
        }
        Err(err) => {
            error!("failed to parse task store: {err}");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Task>(entry) {
            Ok(task) => Some(task),
            Err(err) => {
                warn!("skipping malformed task at index {index}: {err}");
                None
            }
        })
        .collect()
}

/// Overwrites the whole task list.
pub fn save_tasks(store: &dyn KeyValueStore, tasks: &[Task]) -> io::Result<()> {
    let payload = serde_json::to_string_pretty(tasks)?;
    store.set(TASKS_KEY, &payload)
}
