use crate::engine::SyncEngine;
use crate::order::TaskOrder;
use crate::store::FileStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SyncEngine<FileStore>>,
    pub order: Arc<Mutex<TaskOrder>>,
    pub order_path: PathBuf,
}

impl AppState {
    pub fn new(engine: SyncEngine<FileStore>, order: TaskOrder, order_path: PathBuf) -> Self {
        Self {
            engine: Arc::new(engine),
            order: Arc::new(Mutex::new(order)),
            order_path,
        }
    }
}
