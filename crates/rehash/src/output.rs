//! Persisting generated artifacts.

use rehash_agents::{AgentResult, RunSummary};
use rehash_error::{RehashResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};

/// File name of the run record written next to the artifacts.
pub const SUMMARY_FILE: &str = "summary.json";

/// What [`write_outputs`] managed to persist.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Artifact files written
    pub written: Vec<PathBuf>,
    /// Artifacts that could not be written
    pub failed: Vec<StorageError>,
    /// Location of the run record, if it was written
    pub summary_path: Option<PathBuf>,
}

impl WriteReport {
    /// True when every artifact and the run record were written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.summary_path.is_some()
    }
}

/// Write every successful artifact and the run record into `dir`.
///
/// A failed artifact write is recorded in `summary` as a failure and does not
/// stop the remaining writes. A failed run record write is only logged.
/// Files are created owner-readable only on Unix.
///
/// # Errors
///
/// Returns [`StorageErrorKind::DirectoryCreation`] if `dir` cannot be created.
#[instrument(skip(results, summary), fields(dir = %dir.display(), results = results.len()))]
pub async fn write_outputs(
    dir: &Path,
    results: &[AgentResult],
    summary: &mut RunSummary,
) -> RehashResult<WriteReport> {
    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        StorageError::new(StorageErrorKind::DirectoryCreation {
            path: dir.display().to_string(),
            message: e.to_string(),
        })
    })?;

    let mut report = WriteReport::default();
    for result in results.iter().filter(|r| r.is_success()) {
        let path = dir.join(result.output_file());
        match write_private(&path, result.content().as_bytes()).await {
            Ok(()) => {
                debug!(agent = %result.agent_name(), path = %path.display(), "Artifact written");
                report.written.push(path);
            }
            Err(e) => {
                warn!(agent = %result.agent_name(), error = %e, "Failed to write artifact");
                summary.record_write_failure(result.agent_name());
                report.failed.push(e);
            }
        }
    }

    let summary_path = dir.join(SUMMARY_FILE);
    match summary.to_json() {
        Ok(json) => match write_private(&summary_path, json.as_bytes()).await {
            Ok(()) => report.summary_path = Some(summary_path),
            Err(e) => warn!(error = %e, "Failed to write run summary"),
        },
        Err(e) => warn!(error = %e, "Failed to serialize run summary"),
    }

    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "Outputs persisted"
    );
    Ok(report)
}

async fn write_private(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let to_storage_error = |e: std::io::Error| {
        StorageError::new(StorageErrorKind::FileWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    };

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await.map_err(to_storage_error)?;
    file.write_all(contents).await.map_err(to_storage_error)?;
    file.flush().await.map_err(to_storage_error)?;
    Ok(())
}
