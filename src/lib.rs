pub mod achievements;
pub mod app;
pub mod calendar;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod order;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use engine::SyncEngine;
pub use order::TaskOrder;
pub use state::AppState;
pub use store::{FileStore, HabitStore};
