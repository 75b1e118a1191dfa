use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "fincalc.log";
/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// First line of a trimmed log file
const ROTATION_MARKER: &[u8] = b"... earlier log lines trimmed ...\n";

/// Cut the log down to its newest whole lines within `keep` bytes once it is
/// larger than `max_size`.
///
/// Returns `true` when the file was rewritten.
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep: u64) -> io::Result<bool> {
    let size = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if size <= max_size {
        return Ok(false);
    }

    let contents = fs::read(log_path)?;
    let cut = contents.len().saturating_sub(usize::try_from(keep).unwrap_or(usize::MAX));
    let tail = &contents[cut..];
    // drop the partial line at the cut
    let tail = match tail.iter().position(|&b| b == b'\n') {
        Some(newline) if cut > 0 => &tail[newline + 1..],
        _ => tail,
    };

    let mut rotated = Vec::with_capacity(ROTATION_MARKER.len() + tail.len());
    rotated.extend_from_slice(ROTATION_MARKER);
    rotated.extend_from_slice(tail);
    fs::write(log_path, rotated)?;
    Ok(true)
}

/// Initialize logging to `{data_dir}/fincalc.log`.
///
/// Output goes through a non-blocking writer; keep the returned guard alive
/// until exit so buffered lines are flushed. `RUST_LOG` overrides `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let default_filter = format!("fincalc={level},fincalc_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_log_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "line one\nline two\n").unwrap();

        assert!(!rotate_log_if_needed(&path, 1024, 16).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        assert!(!rotate_log_if_needed(&path, 10, 5).unwrap());
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let lines: String = (0..100).map(|i| format!("entry {i:03}\n")).collect();
        fs::write(&path, &lines).unwrap();

        assert!(rotate_log_if_needed(&path, 200, 50).unwrap());
        let rotated = fs::read_to_string(&path).unwrap();
        let mut rotated_lines = rotated.lines();
        assert_eq!(rotated_lines.next(), Some("... earlier log lines trimmed ..."));
        let kept: Vec<_> = rotated_lines.collect();
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|l| l.starts_with("entry ")));
        assert_eq!(kept.last(), Some(&"entry 099"));
        assert!(rotated.len() < lines.len());
    }
}
