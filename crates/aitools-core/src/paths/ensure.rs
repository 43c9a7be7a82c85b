//! Directory creation utilities.

use std::path::Path;

use super::error::PathError;

/// Ensure `path` is a directory, creating it and its parents if missing.
pub async fn ensure_directory(path: &Path) -> Result<(), PathError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PathError::NotADirectory(path.to_path_buf())),
        Err(_) => tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| PathError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
    }
}
