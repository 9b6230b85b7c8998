use crate::models::{DailySummary, Log, Task};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Dates on which every currently-existing task has at least one log.
///
/// Logs whose task id is no longer in `tasks` are ignored, and per-date task
/// ids are collected into a set, so neither stale rows nor double logging can
/// push a date over the line. With no tasks at all, no date counts as
/// achieved.
pub fn achieved_dates(tasks: &[Task], logs: &[Log]) -> BTreeSet<String> {
    if tasks.is_empty() {
        return BTreeSet::new();
    }

    let task_ids: HashSet<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
    let mut logged_by_date: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for log in logs {
        if task_ids.contains(log.task_id.as_str()) {
            logged_by_date
                .entry(log.date.as_str())
                .or_default()
                .insert(log.task_id.as_str());
        }
    }

    logged_by_date
        .into_iter()
        .filter(|(_, ids)| ids.len() == tasks.len())
        .map(|(date, _)| date.to_string())
        .collect()
}

/// Completion state of one date: which current tasks have a log on it.
/// `completed_task_ids` follows the order of `tasks`.
pub fn daily_summary(tasks: &[Task], logs: &[Log], date: &str) -> DailySummary {
    let logged: HashSet<&str> = logs
        .iter()
        .filter(|log| log.date == date)
        .map(|log| log.task_id.as_str())
        .collect();

    let completed_task_ids: Vec<String> = tasks
        .iter()
        .filter(|task| logged.contains(task.id.as_str()))
        .map(|task| task.id.clone())
        .collect();

    let completed_count = completed_task_ids.len();
    let total_count = tasks.len();
    DailySummary {
        date: date.to_string(),
        all_completed: completed_count == total_count && total_count > 0,
        completed_task_ids,
        completed_count,
        total_count,
    }
}
