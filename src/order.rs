use crate::models::Task;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-chosen display order over task ids.
///
/// Persisted in its own local file, never in the row store; the stored list
/// may reference deleted tasks and miss new ones. Applying it is a stable
/// sort, so tasks the order has never seen keep their store order and sort
/// after the ordered ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskOrder {
    pub ids: Vec<String>,
}

impl TaskOrder {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        if self.ids.is_empty() {
            return tasks.to_vec();
        }

        let rank: HashMap<&str, usize> = self
            .ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.as_str(), index))
            .collect();

        let mut sorted = tasks.to_vec();
        sorted.sort_by_key(|task| rank.get(task.id.as_str()).copied().unwrap_or(usize::MAX));
        sorted
    }
}
