//! JSON-file repository implementations.
//!
//! Every write goes to a temporary sibling first and is renamed into place,
//! so a crash mid-write leaves the previous file intact.

mod save;
mod settings;

pub use save::FileSaveStore;
pub use settings::FileSettingsStore;

use std::path::Path;

use crate::repository::{RepositoryError, Result};

async fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes =
        serde_json::to_vec_pretty(value).map_err(|e| RepositoryError::Json(e.to_string()))?;
    let temp_path = path.with_extension("json.tmp");

    tokio::fs::write(&temp_path, bytes).await?;
    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| RepositoryError::Json(format!("{}: {}", path.display(), e))),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(RepositoryError::Io(err)),
    }
}
