// File system persistence for the fleet
// One JSON file holding the full moto collection, rewritten on every change
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::models::Moto;

/// File name of the single storage slot, matching the key the original
/// app used for its blob.
pub const FLEET_FILE: &str = "motos.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to get app data directory")]
    NoAppDataDir,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Get the app data directory for Patio Tracker
pub fn get_app_data_dir() -> StorageResult<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(StorageError::NoAppDataDir)?;
    let app_dir = data_dir.join("com.patiotracker.app");
    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

/// Default path of the fleet blob inside the app data directory
pub fn default_fleet_path() -> StorageResult<PathBuf> {
    Ok(get_app_data_dir()?.join(FLEET_FILE))
}

/// Read the persisted collection. `Ok(None)` means no blob exists yet
/// (first run); a present but unparseable blob is an error.
pub fn read_fleet(path: &Path) -> StorageResult<Option<Vec<Moto>>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Serialize the full collection and replace the blob on disk.
pub fn write_fleet(path: &Path, motos: &[Moto]) -> StorageResult<()> {
    let json = serde_json::to_string(motos)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}
