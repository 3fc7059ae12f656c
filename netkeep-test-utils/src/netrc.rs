//! Credential files for testing
//!
//! [`NetrcGuard`] writes a credential file into an isolated HOME directory so
//! code that locates the file through the home directory finds it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::home::HomeEnvTestGuard;

/// File name used for the credential file on this platform.
#[cfg(windows)]
const FILE_NAME: &str = "_netrc";
#[cfg(not(windows))]
const FILE_NAME: &str = ".netrc";

/// RAII guard for test credential files
///
/// Creates a temporary HOME containing a credential file with the given
/// content and owner-only permissions. HOME is restored when dropped.
pub struct NetrcGuard {
  home: HomeEnvTestGuard,
  netrc_path: PathBuf,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content and mode `0600`
  pub fn new(content: &str) -> Self {
    Self::with_mode(content, 0o600)
  }

  /// Create a new NetrcGuard whose file has the given permission bits.
  /// The mode is ignored on platforms without POSIX permissions.
  pub fn with_mode(content: &str, mode: u32) -> Self {
    let home = HomeEnvTestGuard::new();
    let netrc_path = home.home_path(FILE_NAME);

    fs::write(&netrc_path, content).expect("Failed to write test credential file");
    set_mode(&netrc_path, mode);

    Self { home, netrc_path }
  }

  /// Create a guard with an isolated HOME but no credential file yet
  pub fn empty_home() -> Self {
    let home = HomeEnvTestGuard::new();
    let netrc_path = home.home_path(FILE_NAME);
    Self { home, netrc_path }
  }

  /// Get the path to the credential file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary HOME directory
  pub fn home_dir(&self) -> &Path {
    self.home.home_dir()
  }

  /// Read the current content of the credential file
  pub fn content(&self) -> String {
    fs::read_to_string(&self.netrc_path).expect("Failed to read test credential file")
  }

  /// Permission bits of the credential file, if the platform has them
  pub fn mode(&self) -> Option<u32> {
    file_mode(&self.netrc_path)
  }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("Failed to set test file permissions");
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) {}

#[cfg(unix)]
fn file_mode(path: &Path) -> Option<u32> {
  use std::os::unix::fs::PermissionsExt;

  let metadata = fs::metadata(path).expect("Failed to read test file metadata");
  Some(metadata.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Option<u32> {
  None
}
