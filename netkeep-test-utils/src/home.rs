//! HOME directory management for testing
//!
//! This module provides utilities for isolating the HOME directory during
//! testing so tests never read or overwrite the user's real credential file.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::TempDir;

/// Serializes every test that rewrites HOME within one test binary.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// A test environment that overrides the HOME directory to use a temporary
/// directory. The original value is restored when the guard is dropped.
pub struct HomeEnvTestGuard {
  /// The temporary directory that will be used as HOME
  pub temp_dir: TempDir,
  /// The original HOME value, if any
  original_home: Option<OsString>,
  _lock: MutexGuard<'static, ()>,
}

impl Default for HomeEnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl HomeEnvTestGuard {
  pub const HOME: &'static str = "HOME";

  /// Create a new test environment with a temporary HOME directory
  pub fn new() -> Self {
    // A panicking test must not wedge the remaining ones.
    let lock = HOME_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let original_home = env::var_os(Self::HOME);

    // SAFETY: HOME_LOCK is held, so no other guard touches the environment
    // concurrently.
    unsafe {
      env::set_var(Self::HOME, temp_dir.path());
    }

    Self {
      temp_dir,
      original_home,
      _lock: lock,
    }
  }

  /// Get the path to the temporary HOME directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to a file in the temporary HOME directory
  pub fn home_path(&self, relative_path: &str) -> PathBuf {
    self.temp_dir.path().join(relative_path)
  }
}

impl Drop for HomeEnvTestGuard {
  fn drop(&mut self) {
    // SAFETY: the lock is still held until this guard's fields are dropped.
    unsafe {
      match &self.original_home {
        Some(home) => env::set_var(Self::HOME, home),
        None => env::remove_var(Self::HOME),
      }
    }
  }
}
