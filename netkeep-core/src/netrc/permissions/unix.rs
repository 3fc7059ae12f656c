//! Unix-specific permission handling using chmod-style mode bits.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

use super::{FilePermissions, REQUIRED_MODE};

/// Unix implementation of file permissions using chmod-style permissions
pub struct UnixFilePermissions;

impl FilePermissions for UnixFilePermissions {
  fn mode(path: &Path) -> io::Result<Option<u32>> {
    let metadata = fs::metadata(path)?;
    // Permission and setuid/setgid/sticky bits only, without the file type.
    Ok(Some(metadata.permissions().mode() & 0o7777))
  }

  fn set_secure_permissions(path: &Path) -> io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(REQUIRED_MODE))
  }

  fn open_or_create(path: &Path) -> io::Result<File> {
    match File::open(path) {
      Err(err) if err.kind() == io::ErrorKind::NotFound => {}
      result => return result,
    }

    // Create with a write-only handle, then read through a fresh read-only
    // one. A file created concurrently is read as found.
    match OpenOptions::new()
      .write(true)
      .create_new(true)
      .mode(REQUIRED_MODE)
      .open(path)
    {
      Ok(_) => {}
      Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
      Err(err) => return Err(err),
    }

    File::open(path)
  }

  fn create_truncated(path: &Path) -> io::Result<File> {
    OpenOptions::new()
      .write(true)
      .create(true)
      .truncate(true)
      .mode(REQUIRED_MODE)
      .open(path)
  }
}
