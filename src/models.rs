use serde::{Deserialize, Serialize};

/// Labels the dashboard buckets tasks into, in display order.
pub const CATEGORIES: [&str; 4] = ["Work", "Study", "Personal", "General"];

/// A persisted to-do item.
///
/// `id` is the creation instant in milliseconds since the Unix epoch and doubles
/// as the record's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub category: String,
    pub completed: bool,
    /// Only written when the server runs with the `completion` weekly basis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Task {
    pub fn new(id: i64, text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            category: category.into(),
            completed: false,
            completed_at: None,
        }
    }
}

/// What the "last 7 days" series keys completed tasks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyBasis {
    /// Creation day (`id`) stands in for completion day.
    #[default]
    Created,
    /// `completedAt` when present, creation day otherwise.
    Completion,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub text: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct EditTaskRequest {
    /// `None` means the edit was cancelled.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPoint {
    pub date: String,
    pub label: String,
    pub completed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub today: usize,
    pub completion_pct: u8,
    pub recent: Vec<Task>,
    pub categories: Vec<CategoryCount>,
    pub last_7_days: Vec<DayPoint>,
    pub weekly_basis: WeeklyBasis,
}
