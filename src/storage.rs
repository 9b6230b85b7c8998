use crate::errors::StoreError;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("HABITRA_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/habitra.json")
}

pub fn resolve_order_path() -> PathBuf {
    if let Ok(path) = env::var("HABITRA_ORDER_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/order.json")
}

/// A missing file is an empty value; an unreadable or undecodable file is
/// logged and also treated as empty.
pub async fn load_json<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            T::default()
        }
    }
}

pub async fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(value)?;
    fs::write(path, payload).await?;
    Ok(())
}
