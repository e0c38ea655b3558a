//! Test utilities for badgekit
//!
//! This crate provides shared testing utilities used across the badgekit workspace.

pub mod converter;
pub mod fixtures;

pub use converter::{write_failing_converter, write_fake_converter};
pub use fixtures::{badge_sheet, people_tsv, write_fixture};

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Environment variable naming an explicit converter binary
pub const CONVERTER_ENV: &str = "BADGEKIT_CONVERTER";

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single location
/// that is gitignored and easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use badgekit_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    // Create unique subdirectory within .tmp/
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Run a test with an isolated converter environment
///
/// 1. Points `PATH` at an empty directory, so no system converter is found
/// 2. Sets or clears `BADGEKIT_CONVERTER`
/// 3. Serializes with other env-mutating tests using a Mutex
///
/// The closure receives the empty directory used as `PATH`; tests may drop
/// binaries into it to make them discoverable by name.
///
/// # Examples
///
/// ```no_run
/// use badgekit_testkit::with_isolated_converter_env;
///
/// with_isolated_converter_env(None, |_bin_dir| {
///     // No converter is reachable here
/// });
/// ```
pub fn with_isolated_converter_env<F, R>(converter: Option<&Path>, f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    // Save original environment (for restoration)
    let original_path = std::env::var_os("PATH");
    let original_converter = std::env::var_os(CONVERTER_ENV);

    let bin_dir = TempDir::new().unwrap();

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        std::env::set_var("PATH", bin_dir.path());

        match converter {
            Some(path) => std::env::set_var(CONVERTER_ENV, path),
            None => std::env::remove_var(CONVERTER_ENV),
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(bin_dir.path())));

    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        match original_path {
            Some(path) => std::env::set_var("PATH", path),
            None => std::env::remove_var("PATH"),
        }

        match original_converter {
            Some(converter) => std::env::set_var(CONVERTER_ENV, converter),
            None => std::env::remove_var(CONVERTER_ENV),
        }
    }

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
