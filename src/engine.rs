use crate::errors::SyncError;
use crate::models::{Log, Task};
use crate::store::HabitStore;
use tokio::sync::Mutex;
use tracing::error;

#[derive(Debug, Default)]
struct ClientState {
    tasks: Vec<Task>,
    logs: Vec<Log>,
}

/// Owns the authoritative in-memory copy of tasks and logs and keeps it
/// consistent with the row store behind `S`.
///
/// Toggles are optimistic: the local mutation lands first and a failed store
/// call is compensated by reverting exactly that mutation, scoped to its own
/// `(date, task_id)` pair. Task commands go to the store first and only touch
/// local state on success, so a failure never leaves a phantom or missing
/// task behind. The state lock is never held across a store round-trip, which
/// lets independent in-flight calls complete in any order.
pub struct SyncEngine<S> {
    store: S,
    state: Mutex<ClientState>,
}

impl<S: HabitStore> SyncEngine<S> {
    /// Fetches both collections once and replaces local state wholesale.
    /// Any failure is `SyncError::Load` and no engine exists, so partially
    /// loaded state is never observable.
    pub async fn load(store: S) -> Result<Self, SyncError> {
        let tasks = store.fetch_tasks().await.map_err(SyncError::Load)?;
        let logs = store.fetch_logs().await.map_err(SyncError::Load)?;
        Ok(Self {
            store,
            state: Mutex::new(ClientState { tasks, logs }),
        })
    }

    /// Consistent read model for presentation: current tasks and logs.
    pub async fn snapshot(&self) -> (Vec<Task>, Vec<Log>) {
        let state = self.state.lock().await;
        (state.tasks.clone(), state.logs.clone())
    }

    /// Sets whether `task_id` is logged on `date`.
    ///
    /// The presence of the pair is captured and the optimistic mutation
    /// applied in one critical section, before the store call is issued. A
    /// toggle that already matches local state changes nothing locally but
    /// the store call still goes out: the store stays the source of truth
    /// and its idempotent confirm is cheap at this scale.
    pub async fn toggle_log(&self, date: &str, task_id: &str, want: bool) -> Result<(), SyncError> {
        let was_present = {
            let mut state = self.state.lock().await;
            let present = state.logs.iter().any(|log| log.matches(date, task_id));
            if want && !present {
                state.logs.push(local_log(date, task_id));
            } else if !want && present {
                state.logs.retain(|log| !log.matches(date, task_id));
            }
            present
        };

        let result = if want {
            self.store.add_log(date, task_id).await.map(|_| ())
        } else {
            self.store.delete_log(date, task_id).await.map(|_| ())
        };

        if let Err(err) = result {
            error!("toggle {date}/{task_id} failed, rolling back: {err}");
            let mut state = self.state.lock().await;
            if want && !was_present {
                state.logs.retain(|log| !log.matches(date, task_id));
            } else if !want
                && was_present
                && !state.logs.iter().any(|log| log.matches(date, task_id))
            {
                state.logs.push(local_log(date, task_id));
            }
            return Err(SyncError::Remote(err));
        }

        Ok(())
    }

    /// Appends a task. Identity comes from the store, so the returned task is
    /// what lands in local state; a failure makes no local change and a retry
    /// is the caller's call.
    pub async fn add_task(&self, title: &str) -> Result<Task, SyncError> {
        let title = validated_title(title)?;
        let task = self
            .store
            .add_task(&title)
            .await
            .map_err(SyncError::Remote)?;
        let mut state = self.state.lock().await;
        state.tasks.push(task.clone());
        Ok(task)
    }

    /// Renames a task. An id the store does not know is `TaskNotFound`.
    pub async fn update_task(&self, id: &str, new_title: &str) -> Result<Task, SyncError> {
        let title = validated_title(new_title)?;
        let updated = self
            .store
            .update_task(id, &title)
            .await
            .map_err(SyncError::Remote)?
            .ok_or_else(|| SyncError::TaskNotFound(id.to_string()))?;
        let mut state = self.state.lock().await;
        if let Some(slot) = state.tasks.iter_mut().find(|task| task.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes a task and every log referencing it. Log rows go first on the
    /// store side, then the task row; local state mirrors the full cascade on
    /// success so no dangling local log can skew aggregation.
    pub async fn delete_task(&self, id: &str) -> Result<bool, SyncError> {
        self.store
            .delete_logs_for_task(id)
            .await
            .map_err(SyncError::Remote)?;
        let found = self
            .store
            .delete_task(id)
            .await
            .map_err(SyncError::Remote)?;
        let mut state = self.state.lock().await;
        state.tasks.retain(|task| task.id != id);
        state.logs.retain(|log| log.task_id != id);
        Ok(found)
    }
}

fn local_log(date: &str, task_id: &str) -> Log {
    Log {
        date: date.to_string(),
        task_id: task_id.to_string(),
        timestamp: String::new(),
    }
}

fn validated_title(title: &str) -> Result<String, SyncError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SyncError::Validation("title must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::models::StoreData;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory store with switchable failure injection. Every call counts
    /// against `calls` before the failure gate so "no remote call was made"
    /// is observable.
    #[derive(Default)]
    struct FlakyStore {
        rows: Mutex<StoreData>,
        next_id: AtomicUsize,
        fail: Arc<AtomicBool>,
        calls: Arc<AtomicUsize>,
    }

    impl FlakyStore {
        fn seeded(tasks: Vec<Task>, logs: Vec<Log>) -> Self {
            Self {
                rows: Mutex::new(StoreData { tasks, logs }),
                ..Self::default()
            }
        }

        fn fail_flag(&self) -> Arc<AtomicBool> {
            Arc::clone(&self.fail)
        }

        fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }

        fn gate(&self) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable("injected failure".into()));
            }
            Ok(())
        }
    }

    impl HabitStore for FlakyStore {
        async fn fetch_tasks(&self) -> Result<Vec<Task>, StoreError> {
            self.gate()?;
            Ok(self.rows.lock().await.tasks.clone())
        }

        async fn add_task(&self, title: &str) -> Result<Task, StoreError> {
            self.gate()?;
            let task = Task {
                id: format!("srv-{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
                title: title.to_string(),
                created_at: "2026-01-01T00:00:00Z".to_string(),
            };
            self.rows.lock().await.tasks.push(task.clone());
            Ok(task)
        }

        async fn update_task(&self, id: &str, title: &str) -> Result<Option<Task>, StoreError> {
            self.gate()?;
            let mut rows = self.rows.lock().await;
            Ok(rows.tasks.iter_mut().find(|task| task.id == id).map(|task| {
                task.title = title.to_string();
                task.clone()
            }))
        }

        async fn delete_task(&self, id: &str) -> Result<bool, StoreError> {
            self.gate()?;
            let mut rows = self.rows.lock().await;
            let before = rows.tasks.len();
            rows.tasks.retain(|task| task.id != id);
            Ok(rows.tasks.len() < before)
        }

        async fn fetch_logs(&self) -> Result<Vec<Log>, StoreError> {
            self.gate()?;
            Ok(self.rows.lock().await.logs.clone())
        }

        async fn add_log(&self, date: &str, task_id: &str) -> Result<Log, StoreError> {
            self.gate()?;
            let log = Log {
                date: date.to_string(),
                task_id: task_id.to_string(),
                timestamp: "2026-01-01T00:00:00Z".to_string(),
            };
            self.rows.lock().await.logs.push(log.clone());
            Ok(log)
        }

        async fn delete_log(&self, date: &str, task_id: &str) -> Result<bool, StoreError> {
            self.gate()?;
            let mut rows = self.rows.lock().await;
            let before = rows.logs.len();
            rows.logs.retain(|log| !log.matches(date, task_id));
            Ok(rows.logs.len() < before)
        }

        async fn delete_logs_for_task(&self, task_id: &str) -> Result<usize, StoreError> {
            self.gate()?;
            let mut rows = self.rows.lock().await;
            let before = rows.logs.len();
            rows.logs.retain(|log| log.task_id != task_id);
            Ok(before - rows.logs.len())
        }
    }

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn log(date: &str, task_id: &str) -> Log {
        Log {
            date: date.to_string(),
            task_id: task_id.to_string(),
            timestamp: String::new(),
        }
    }

    async fn has_log(engine: &SyncEngine<FlakyStore>, date: &str, task_id: &str) -> bool {
        let (_, logs) = engine.snapshot().await;
        logs.iter().any(|l| l.matches(date, task_id))
    }

    #[tokio::test]
    async fn load_failure_surfaces_as_load_error() {
        let store = FlakyStore::default();
        store.fail.store(true, Ordering::SeqCst);
        let err = SyncEngine::load(store).await.err().expect("load should fail");
        assert!(matches!(err, SyncError::Load(_)));
    }

    #[tokio::test]
    async fn toggle_on_then_off_leaves_logs_unchanged() {
        let store = FlakyStore::seeded(vec![task("a", "Read")], vec![]);
        let engine = SyncEngine::load(store).await.unwrap();

        engine.toggle_log("2026-02-01", "a", true).await.unwrap();
        assert!(has_log(&engine, "2026-02-01", "a").await);

        engine.toggle_log("2026-02-01", "a", false).await.unwrap();
        let (_, logs) = engine.snapshot().await;
        assert!(logs.is_empty());
    }

    #[tokio::test]
    async fn failed_toggle_on_rolls_back_to_absent() {
        let store = FlakyStore::default();
        let fail = store.fail_flag();
        let engine = SyncEngine::load(store).await.unwrap();

        fail.store(true, Ordering::SeqCst);
        let err = engine.toggle_log("2026-02-01", "a", true).await;
        assert!(matches!(err, Err(SyncError::Remote(_))));
        assert!(!has_log(&engine, "2026-02-01", "a").await);
    }

    #[tokio::test]
    async fn failed_toggle_off_restores_the_entry() {
        let store = FlakyStore::seeded(vec![task("a", "Read")], vec![log("2026-02-01", "a")]);
        let fail = store.fail_flag();
        let engine = SyncEngine::load(store).await.unwrap();

        fail.store(true, Ordering::SeqCst);
        let err = engine.toggle_log("2026-02-01", "a", false).await;
        assert!(matches!(err, Err(SyncError::Remote(_))));
        assert!(has_log(&engine, "2026-02-01", "a").await);
    }

    #[tokio::test]
    async fn rollback_is_scoped_to_its_own_pair() {
        let store = FlakyStore::seeded(vec![task("a", "Read"), task("b", "Run")], vec![]);
        let fail = store.fail_flag();
        let engine = SyncEngine::load(store).await.unwrap();

        engine.toggle_log("2026-02-01", "a", true).await.unwrap();

        fail.store(true, Ordering::SeqCst);
        assert!(engine.toggle_log("2026-02-02", "b", true).await.is_err());

        // The failed toggle reverted only its own pair.
        assert!(has_log(&engine, "2026-02-01", "a").await);
        assert!(!has_log(&engine, "2026-02-02", "b").await);
    }

    #[tokio::test]
    async fn concurrent_toggles_on_different_pairs_both_land() {
        let store = FlakyStore::seeded(vec![task("a", "Read"), task("b", "Run")], vec![]);
        let engine = Arc::new(SyncEngine::load(store).await.unwrap());

        let (first, second) = tokio::join!(
            engine.toggle_log("2026-02-01", "a", true),
            engine.toggle_log("2026-02-01", "b", true),
        );
        first.unwrap();
        second.unwrap();

        assert!(has_log(&engine, "2026-02-01", "a").await);
        assert!(has_log(&engine, "2026-02-01", "b").await);
    }

    #[tokio::test]
    async fn redundant_toggle_is_local_noop_but_still_calls_store() {
        let store = FlakyStore::seeded(vec![task("a", "Read")], vec![log("2026-02-01", "a")]);
        let calls = store.call_counter();
        let engine = SyncEngine::load(store).await.unwrap();

        let before = calls.load(Ordering::SeqCst);
        engine.toggle_log("2026-02-01", "a", true).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), before + 1);

        let (_, logs) = engine.snapshot().await;
        assert_eq!(logs.len(), 1, "no duplicate entry for the same pair");
    }

    #[tokio::test]
    async fn add_task_rejects_blank_title_without_remote_call() {
        let store = FlakyStore::default();
        let calls = store.call_counter();
        let engine = SyncEngine::load(store).await.unwrap();

        let before = calls.load(Ordering::SeqCst);
        let err = engine.add_task("   ").await;
        assert!(matches!(err, Err(SyncError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), before);

        let (tasks, _) = engine.snapshot().await;
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn add_task_appends_store_assigned_identity() {
        let store = FlakyStore::default();
        let engine = SyncEngine::load(store).await.unwrap();

        let added = engine.add_task("  Read  ").await.unwrap();
        assert_eq!(added.id, "srv-0");
        assert_eq!(added.title, "Read");

        let (tasks, _) = engine.snapshot().await;
        assert_eq!(tasks, vec![added]);
    }

    #[tokio::test]
    async fn failed_add_task_makes_no_local_change() {
        let store = FlakyStore::default();
        let fail = store.fail_flag();
        let engine = SyncEngine::load(store).await.unwrap();

        fail.store(true, Ordering::SeqCst);
        assert!(matches!(
            engine.add_task("Read").await,
            Err(SyncError::Remote(_))
        ));
        let (tasks, _) = engine.snapshot().await;
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn update_task_replaces_local_entry() {
        let store = FlakyStore::seeded(vec![task("a", "Read")], vec![]);
        let engine = SyncEngine::load(store).await.unwrap();

        let updated = engine.update_task("a", "Read more").await.unwrap();
        assert_eq!(updated.title, "Read more");

        let (tasks, _) = engine.snapshot().await;
        assert_eq!(tasks[0].title, "Read more");
    }

    #[tokio::test]
    async fn update_unknown_task_is_not_found() {
        let store = FlakyStore::seeded(vec![task("a", "Read")], vec![]);
        let engine = SyncEngine::load(store).await.unwrap();

        assert!(matches!(
            engine.update_task("ghost", "x").await,
            Err(SyncError::TaskNotFound(_))
        ));
        let (tasks, _) = engine.snapshot().await;
        assert_eq!(tasks[0].title, "Read");
    }

    #[tokio::test]
    async fn delete_task_cascades_local_logs() {
        let store = FlakyStore::seeded(
            vec![task("a", "Read"), task("b", "Run")],
            vec![
                log("2026-02-01", "a"),
                log("2026-02-02", "a"),
                log("2026-02-01", "b"),
            ],
        );
        let engine = SyncEngine::load(store).await.unwrap();

        assert!(engine.delete_task("a").await.unwrap());

        let (tasks, logs) = engine.snapshot().await;
        assert_eq!(tasks, vec![task("b", "Run")]);
        assert_eq!(logs, vec![log("2026-02-01", "b")]);
    }

    #[tokio::test]
    async fn failed_delete_task_makes_no_local_change() {
        let store = FlakyStore::seeded(vec![task("a", "Read")], vec![log("2026-02-01", "a")]);
        let fail = store.fail_flag();
        let engine = SyncEngine::load(store).await.unwrap();

        fail.store(true, Ordering::SeqCst);
        assert!(engine.delete_task("a").await.is_err());

        let (tasks, logs) = engine.snapshot().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(logs.len(), 1);
    }
}
