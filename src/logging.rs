use crate::wordbank::APP_DIR;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

pub const LOG_FILE_NAME: &str = "wordle-narrower.log";

/// `<cache dir>/wordle-narrower/wordle-narrower.log`
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
}

/// Set up `env_logger` with timestamped lines. Level comes from `RUST_LOG`
/// (default `warn`). With a `log_file` the output is appended there instead
/// of stderr.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (e.g. by a test harness).
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(Path::new(APP_DIR).join(LOG_FILE_NAME)));
        }
    }

    #[test]
    fn test_init_with_log_file_creates_it() {
        let dir = std::env::temp_dir().join("wordle_narrower_logging_test");
        let path = dir.join(LOG_FILE_NAME);
        init(Some(&path)).unwrap();
        assert!(path.exists());
        // Second init must not fail
        init(None).unwrap();
        let _ = fs::remove_dir_all(&dir);
    }
}
