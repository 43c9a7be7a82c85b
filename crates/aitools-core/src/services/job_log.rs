//! Filesystem helpers for the pull job-log directory.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::debug;

use crate::domain::PullStatus;

/// Bytes read from the end of a log to find its terminal marker.
const TAIL_BYTES: u64 = 512;

/// Names of all entries in the job-log directory, sorted.
///
/// A missing or unreadable directory yields no entries.
pub(crate) async fn read_entries(dir: &Path) -> Vec<String> {
    let mut reader = match tokio::fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "job-log directory not readable");
            return Vec::new();
        }
    };

    let mut names = Vec::new();
    loop {
        match reader.next_entry().await {
            Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().into_owned()),
            Ok(None) => break,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "stopped reading job-log directory");
                break;
            }
        }
    }
    names.sort();
    names
}

/// Classify a job log by reading only its tail.
pub(crate) async fn read_status(path: &Path) -> Option<PullStatus> {
    let mut file = tokio::fs::File::open(path).await.ok()?;
    let len = file.metadata().await.ok()?.len();
    file.seek(SeekFrom::Start(len.saturating_sub(TAIL_BYTES)))
        .await
        .ok()?;
    let mut tail = Vec::with_capacity(usize::try_from(TAIL_BYTES).unwrap_or_default());
    file.read_to_end(&mut tail).await.ok()?;
    Some(PullStatus::from_log(&String::from_utf8_lossy(&tail)))
}

/// Delete a job log, ignoring every failure. Returns whether a file was removed.
pub(crate) async fn remove_quietly(path: PathBuf) -> bool {
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {
            debug!(path = %path.display(), "removed job log");
            true
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "job log not removed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn entries_are_sorted_and_missing_dir_is_empty() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("mistral"), b"").unwrap();
        std::fs::write(temp.path().join("llama2"), b"").unwrap();

        assert_eq!(read_entries(temp.path()).await, vec!["llama2", "mistral"]);
        assert!(read_entries(&temp.path().join("nope")).await.is_empty());
    }

    #[tokio::test]
    async fn status_comes_from_the_tail_of_long_logs() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("llama2");
        let mut body = "pulling manifest 10%\r".repeat(200);
        body.push_str("ollama pull successful!");
        std::fs::write(&path, body).unwrap();

        assert_eq!(read_status(&path).await, Some(PullStatus::Succeeded));
        assert_eq!(read_status(&temp.path().join("missing")).await, None);
    }

    #[tokio::test]
    async fn remove_quietly_tolerates_missing_files() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("llama2");
        std::fs::write(&path, b"x").unwrap();

        assert!(remove_quietly(path.clone()).await);
        assert!(!remove_quietly(path).await);
    }
}
