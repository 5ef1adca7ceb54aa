//! Test utilities for backlog.
//!
//! Tests that change the process-wide working directory, or the environment
//! read by [`crate::config::Config::load`], serialize on a global mutex.

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use tempfile::TempDir;

/// Global mutex for tests that change the current working directory.
#[cfg(test)]
pub static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Execute a closure in a temporary directory, returning to the original
/// directory afterward.
///
/// # Panics
///
/// Panics if the current directory cannot be determined, the temp directory
/// cannot be created, or the directory changes fail.
#[cfg(test)]
pub fn with_temp_cwd<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::current_dir().expect("failed to get current directory");
    let temp = TempDir::new().expect("failed to create temp directory");
    std::env::set_current_dir(temp.path()).expect("failed to change to temp directory");
    let result = f();
    std::env::set_current_dir(original).expect("failed to restore original directory");
    result
}
