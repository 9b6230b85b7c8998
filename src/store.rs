use crate::errors::StoreError;
use crate::models::{Log, StoreData, Task};
use crate::storage;
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Row-store contract the sync engine talks to.
///
/// Each collection is an ordered sequence of rows found, updated and deleted
/// by linear scan. Every call is an async round-trip that resolves or fails;
/// nothing orders independent calls relative to each other. `fetch_*` on an
/// empty store returns an empty sequence, not an error. Task identity
/// (`id`, `created_at`) and log timestamps are assigned on the store side.
#[allow(async_fn_in_trait)]
pub trait HabitStore {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, StoreError>;
    async fn add_task(&self, title: &str) -> Result<Task, StoreError>;
    /// Updates the title of the matching row; `None` if no row matches.
    async fn update_task(&self, id: &str, title: &str) -> Result<Option<Task>, StoreError>;
    /// True iff a matching row was found and removed.
    async fn delete_task(&self, id: &str) -> Result<bool, StoreError>;

    async fn fetch_logs(&self) -> Result<Vec<Log>, StoreError>;
    async fn add_log(&self, date: &str, task_id: &str) -> Result<Log, StoreError>;
    async fn delete_log(&self, date: &str, task_id: &str) -> Result<bool, StoreError>;
    /// Cascade helper: removes every log row for the task, returns the count.
    async fn delete_logs_for_task(&self, task_id: &str) -> Result<usize, StoreError>;
}

/// JSON-file-backed row store. Rows live in memory behind one lock and the
/// whole document is rewritten after each mutation, so the store serializes
/// its own row mutations.
pub struct FileStore {
    path: PathBuf,
    rows: Mutex<StoreData>,
}

impl FileStore {
    pub async fn load(path: PathBuf) -> Self {
        let rows = storage::load_json(&path).await;
        Self {
            path,
            rows: Mutex::new(rows),
        }
    }

    async fn persist(&self, rows: &StoreData) -> Result<(), StoreError> {
        storage::save_json(&self.path, rows).await
    }
}

impl HabitStore for FileStore {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.rows.lock().await.tasks.clone())
    }

    async fn add_task(&self, title: &str) -> Result<Task, StoreError> {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };
        let mut rows = self.rows.lock().await;
        rows.tasks.push(task.clone());
        self.persist(&rows).await?;
        Ok(task)
    }

    async fn update_task(&self, id: &str, title: &str) -> Result<Option<Task>, StoreError> {
        let mut rows = self.rows.lock().await;
        let updated = match rows.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.title = title.to_string();
                task.clone()
            }
            None => return Ok(None),
        };
        self.persist(&rows).await?;
        Ok(Some(updated))
    }

    async fn delete_task(&self, id: &str) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().await;
        let Some(index) = rows.tasks.iter().position(|task| task.id == id) else {
            return Ok(false);
        };
        rows.tasks.remove(index);
        self.persist(&rows).await?;
        Ok(true)
    }

    async fn fetch_logs(&self) -> Result<Vec<Log>, StoreError> {
        Ok(self.rows.lock().await.logs.clone())
    }

    async fn add_log(&self, date: &str, task_id: &str) -> Result<Log, StoreError> {
        let log = Log {
            date: date.to_string(),
            task_id: task_id.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };
        let mut rows = self.rows.lock().await;
        rows.logs.push(log.clone());
        self.persist(&rows).await?;
        Ok(log)
    }

    async fn delete_log(&self, date: &str, task_id: &str) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().await;
        let Some(index) = rows.logs.iter().position(|log| log.matches(date, task_id)) else {
            return Ok(false);
        };
        rows.logs.remove(index);
        self.persist(&rows).await?;
        Ok(true)
    }

    async fn delete_logs_for_task(&self, task_id: &str) -> Result<usize, StoreError> {
        let mut rows = self.rows.lock().await;
        let before = rows.logs.len();
        rows.logs.retain(|log| log.task_id != task_id);
        let removed = before - rows.logs.len();
        if removed > 0 {
            self.persist(&rows).await?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("rows.json")
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::load(store_path(&dir)).await;
        assert!(store.fetch_tasks().await.unwrap().is_empty());
        assert!(store.fetch_logs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_task_assigns_identity() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::load(store_path(&dir)).await;

        let first = store.add_task("Read").await.unwrap();
        let second = store.add_task("Run").await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(!first.created_at.is_empty());

        let tasks = store.fetch_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Read");
        assert_eq!(tasks[1].title, "Run");
    }

    #[tokio::test]
    async fn update_task_rewrites_title_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::load(store_path(&dir)).await;
        let task = store.add_task("Read").await.unwrap();

        let updated = store.update_task(&task.id, "Read more").await.unwrap();
        let updated = updated.expect("row should exist");
        assert_eq!(updated.id, task.id);
        assert_eq!(updated.title, "Read more");
        assert_eq!(updated.created_at, task.created_at);

        assert!(store.update_task("missing", "x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_log_removes_exact_pair_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::load(store_path(&dir)).await;
        store.add_log("2026-02-01", "a").await.unwrap();
        store.add_log("2026-02-01", "b").await.unwrap();
        store.add_log("2026-02-02", "a").await.unwrap();

        assert!(store.delete_log("2026-02-01", "a").await.unwrap());
        assert!(!store.delete_log("2026-02-01", "a").await.unwrap());

        let logs = store.fetch_logs().await.unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().any(|log| log.matches("2026-02-01", "b")));
        assert!(logs.iter().any(|log| log.matches("2026-02-02", "a")));
    }

    #[tokio::test]
    async fn delete_logs_for_task_counts_removed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::load(store_path(&dir)).await;
        store.add_log("2026-02-01", "a").await.unwrap();
        store.add_log("2026-02-02", "a").await.unwrap();
        store.add_log("2026-02-01", "b").await.unwrap();

        assert_eq!(store.delete_logs_for_task("a").await.unwrap(), 2);
        assert_eq!(store.delete_logs_for_task("a").await.unwrap(), 0);
        assert_eq!(store.fetch_logs().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rows_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let task = {
            let store = FileStore::load(path.clone()).await;
            let task = store.add_task("Read").await.unwrap();
            store.add_log("2026-02-01", &task.id).await.unwrap();
            task
        };

        let reloaded = FileStore::load(path).await;
        let tasks = reloaded.fetch_tasks().await.unwrap();
        let logs = reloaded.fetch_logs().await.unwrap();
        assert_eq!(tasks, vec![task.clone()]);
        assert_eq!(logs.len(), 1);
        assert!(logs[0].matches("2026-02-01", &task.id));
    }
}
