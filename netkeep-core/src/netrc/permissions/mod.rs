//! Permission guard for credential files
//!
//! A credential file that others can read or write may have been shared or
//! tampered with, so it is refused before its contents are opened. Files this
//! crate creates are given owner-only permissions from the start.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{NetrcError, Result};

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::*;
#[cfg(windows)]
pub use windows::*;

/// The only permission bits accepted on an existing file (owner read/write).
pub const REQUIRED_MODE: u32 = 0o600;

/// Trait for platform-specific file permission operations
pub trait FilePermissions {
  /// Permission bits of an existing file, or `None` where the platform has
  /// no such notion.
  fn mode(path: &Path) -> io::Result<Option<u32>>;

  /// Set owner-only permissions on an existing file.
  fn set_secure_permissions(path: &Path) -> io::Result<()>;

  /// Open `path` read-only, creating it empty with owner-only permissions
  /// first if it does not exist. An existing file is never opened for
  /// writing, so it can live on a read-only filesystem.
  fn open_or_create(path: &Path) -> io::Result<File>;

  /// Open `path` for writing, truncating it, creating it with owner-only
  /// permissions if it does not exist.
  fn create_truncated(path: &Path) -> io::Result<File>;
}

#[cfg(unix)]
type Platform = UnixFilePermissions;
#[cfg(windows)]
type Platform = WindowsFilePermissions;

/// Refuse to proceed if `path` exists with permissions other than `0600`.
///
/// A missing file passes the check and is not created.
///
/// # Errors
///
/// Returns [`NetrcError::InsecurePermissions`] for an existing file with any
/// other mode, and [`NetrcError::Io`] when the file cannot be inspected.
pub fn check_permissions(path: &Path) -> Result<()> {
  let mode = match Platform::mode(path) {
    Ok(mode) => mode,
    Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
    Err(err) => return Err(err.into()),
  };

  match mode {
    Some(mode) if mode != REQUIRED_MODE => Err(NetrcError::InsecurePermissions {
      path: path.to_path_buf(),
      mode,
    }),
    _ => Ok(()),
  }
}

/// Whether `path` exists and passes [`check_permissions`].
pub fn has_secure_permissions(path: &Path) -> Result<bool> {
  match Platform::mode(path) {
    Ok(mode) => Ok(mode.is_none_or(|mode| mode == REQUIRED_MODE)),
    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
    Err(err) => Err(err.into()),
  }
}

/// Tighten an existing file to `0600`.
pub fn set_secure_permissions(path: &Path) -> Result<()> {
  Platform::set_secure_permissions(path).map_err(NetrcError::from)
}

pub(crate) fn open_or_create(path: &Path) -> Result<File> {
  Platform::open_or_create(path).map_err(NetrcError::from)
}

pub(crate) fn create_truncated(path: &Path) -> Result<File> {
  Platform::create_truncated(path).map_err(NetrcError::from)
}
