//! Windows-specific permission handling
//!
//! Windows files carry ACLs rather than POSIX mode bits, so there is nothing
//! for the guard to compare against and every existing file is accepted.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use super::FilePermissions;

/// Windows implementation of file permissions
pub struct WindowsFilePermissions;

impl FilePermissions for WindowsFilePermissions {
  fn mode(path: &Path) -> io::Result<Option<u32>> {
    fs::metadata(path).map(|_| None)
  }

  fn set_secure_permissions(path: &Path) -> io::Result<()> {
    // No mode bits to change; only confirm the file is there.
    fs::metadata(path).map(|_| ())
  }

  fn open_or_create(path: &Path) -> io::Result<File> {
    match File::open(path) {
      Err(err) if err.kind() == io::ErrorKind::NotFound => {}
      result => return result,
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
      Ok(_) => {}
      Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
      Err(err) => return Err(err),
    }

    File::open(path)
  }

  fn create_truncated(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
  }
}
