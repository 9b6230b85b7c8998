use serde::{Deserialize, Serialize};

use crate::calendar::CalendarMode;

/// A recurring habit the user tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

/// One completion record: `task_id` was done on `date` (YYYY-MM-DD).
///
/// Logical identity is the `(date, task_id)` pair; `timestamp` only records
/// when the row was written. `task_id` may reference a task that no longer
/// exists and readers must tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub date: String,
    #[serde(rename = "taskId")]
    pub task_id: String,
    #[serde(default)]
    pub timestamp: String,
}

impl Log {
    pub fn matches(&self, date: &str, task_id: &str) -> bool {
        self.date == date && self.task_id == task_id
    }
}

/// On-disk document backing the row store: both row collections, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    pub tasks: Vec<Task>,
    pub logs: Vec<Log>,
}

#[derive(Debug, Serialize)]
pub struct InitialData {
    pub tasks: Vec<Task>,
    pub logs: Vec<Log>,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    pub deleted: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleLogRequest {
    pub date: String,
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct ToggleLogResponse {
    pub date: String,
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub done: bool,
}

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub order: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub anchor: Option<String>,
    pub mode: Option<CalendarMode>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub achieved: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub start: String,
    pub end: String,
    pub days: Vec<CalendarDay>,
}

/// Completion state of a single date, derived from current tasks and logs.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub completed_task_ids: Vec<String>,
    pub completed_count: usize,
    pub total_count: usize,
    pub all_completed: bool,
}
