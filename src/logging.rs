//! Logging setup
//!
//! The terminal belongs to the TUI, so log records go to a file. Debug builds
//! always log to the default file; release builds log only when a file is
//! requested. The level comes from `RUST_LOG` and defaults to `debug`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::error::TypeaheadError;

const LOG_DIR: &str = "typeahead";
const LOG_FILE: &str = "typeahead.log";

/// Default log file location
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Where to log, if anywhere
pub fn resolve_log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if cfg!(debug_assertions) => default_log_path(),
        None => None,
    }
}

/// Install the global logger
///
/// Returns the file being written, or `None` when logging stays off.
pub fn init(explicit: Option<&Path>) -> Result<Option<PathBuf>, TypeaheadError> {
    let Some(path) = resolve_log_path(explicit) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    let installed = Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if installed.is_err() {
        // A logger is already in place (tests, embedding); keep it
        return Ok(None);
    }

    log::debug!("Logging to {}", path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/typeahead-test.log");
        assert_eq!(resolve_log_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_default_path_only_in_debug_builds() {
        let resolved = resolve_log_path(None);
        if cfg!(debug_assertions) {
            assert_eq!(resolved, default_log_path());
        } else {
            assert_eq!(resolved, None);
        }
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("typeahead/typeahead.log"));
        }
    }

    #[test]
    fn test_init_writes_to_requested_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.log");

        let result = init(Some(&path)).unwrap();

        // The file exists whether or not another test installed a logger first
        assert!(path.is_file());
        if let Some(used) = result {
            assert_eq!(used, path);
        }
    }
}
