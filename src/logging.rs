//! File logging via `tracing`.
//!
//! The terminal belongs to the UI, so events go to
//! `<data_dir>/feedbox/feedbox.log`. The filter comes from `RUST_LOG` and
//! defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::tui::AppError;

/// Returns `<data_dir>/feedbox/feedbox.log`.
pub fn default_log_path() -> Result<PathBuf, AppError> {
    let data_dir = dirs::data_dir().ok_or(AppError::NoDataDir)?;
    Ok(log_path_in(&data_dir))
}

fn log_path_in(data_dir: &Path) -> PathBuf {
    data_dir.join("feedbox").join("feedbox.log")
}

/// Installs the global subscriber, appending to the file at `path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_is_under_app_dir() {
        let path = log_path_in(Path::new("/data"));
        assert_eq!(path, Path::new("/data/feedbox/feedbox.log"));
    }
}
