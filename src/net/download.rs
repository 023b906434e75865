// SPDX-License-Identifier: MPL-2.0
//! Sequential photo download runs.
//!
//! A run walks the selection queue one item at a time: fetch, stream to
//! disk, pause, next. Per-item failures are recorded and the run moves on;
//! only the caller decides what to do with the final counts.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Result type for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// Errors that can occur while saving one photo.
#[derive(Debug, Clone)]
pub enum DownloadError {
    /// Request could not be sent or the transfer broke off.
    Request(String),
    /// Service answered with a non-success HTTP status.
    Status(u16),
    /// Writing the file failed.
    Io(String),
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::Request(msg) => write!(f, "Request failed: {msg}"),
            DownloadError::Status(code) => write!(f, "HTTP status: {code}"),
            DownloadError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for DownloadError {}

/// Per-item outcome inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Saved,
    Failed,
}

/// Progress events emitted while a run advances.
///
/// Delivery is best-effort; the authoritative counts travel in the final
/// [`RunReport`], never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    /// Item `index` (1-based) of `total` started downloading.
    ItemStarted { index: usize, total: usize },
    /// Item `index` finished with the given outcome.
    ItemFinished {
        index: usize,
        total: usize,
        outcome: ItemOutcome,
    },
}

/// Final counts for a finished run.
///
/// `attempted == saved + failed` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    pub attempted: usize,
    pub saved: usize,
    pub failed: usize,
}

impl RunReport {
    /// Whether every attempted item was saved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Downloads every queued photo into `destination`, sequentially.
///
/// Items are processed in queue order. A failed item is counted and the
/// run continues with the next one. Between two items (also after a
/// failure, never after the last item) the run sleeps `pacing`.
///
/// Existing files with the same name are overwritten.
pub async fn run_queue(
    client: &reqwest::Client,
    queue: &[String],
    destination: &Path,
    pacing: Duration,
    mut on_event: impl FnMut(RunEvent) + Send,
) -> RunReport {
    let total = queue.len();
    let mut report = RunReport {
        attempted: total,
        ..RunReport::default()
    };

    for (position, url) in queue.iter().enumerate() {
        let index = position + 1;
        on_event(RunEvent::ItemStarted { index, total });

        let outcome = match save_photo(client, url, destination, index).await {
            Ok(path) => {
                log::debug!("Saved {} as {}", url, path.display());
                report.saved += 1;
                ItemOutcome::Saved
            }
            Err(err) => {
                log::warn!("Skipping {}: {}", url, err);
                report.failed += 1;
                ItemOutcome::Failed
            }
        };

        on_event(RunEvent::ItemFinished {
            index,
            total,
            outcome,
        });

        if index < total {
            tokio::time::sleep(pacing).await;
        }
    }

    report
}

/// Fetches one photo and streams it into `destination`.
///
/// Returns the path of the written file. A partially written file is
/// removed when the transfer breaks off.
async fn save_photo(
    client: &reqwest::Client,
    url: &str,
    destination: &Path,
    queue_index: usize,
) -> DownloadResult<PathBuf> {
    use futures_util::StreamExt;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DownloadError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let path = destination.join(filename_for(url, queue_index, content_type.as_deref()));
    let mut file = std::fs::File::create(&path).map_err(|e| DownloadError::Io(e.to_string()))?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                let _ = std::fs::remove_file(&path);
                return Err(DownloadError::Request(err.to_string()));
            }
        };
        if let Err(err) = std::io::Write::write_all(&mut file, &chunk) {
            let _ = std::fs::remove_file(&path);
            return Err(DownloadError::Io(err.to_string()));
        }
    }

    Ok(path)
}

/// Picks the filename for one queued photo.
///
/// The last URL path segment (query and fragment stripped) wins; when that
/// is unusable, a `photo_{index}.{ext}` name is synthesized from the
/// 1-based queue index and the response content type.
pub fn filename_for(url: &str, queue_index: usize, content_type: Option<&str>) -> String {
    match filename_from_url(url) {
        Some(name) => name,
        None => format!("photo_{}.{}", queue_index, extension_for(content_type)),
    }
}

fn filename_from_url(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next()?;
    let without_query = without_fragment.split('?').next()?;
    let segment = without_query.rsplit('/').next()?;
    // "." and ".." would escape the destination folder
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

fn extension_for(content_type: Option<&str>) -> String {
    content_type
        .and_then(|value| value.split(';').next())
        .and_then(|mime| mime.trim().split('/').nth(1))
        .filter(|subtype| !subtype.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "jpg".to_string())
}
