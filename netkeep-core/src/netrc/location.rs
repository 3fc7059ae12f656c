//! Where the credential file lives.

use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::Result;

/// File name of the credential file in the user's home directory.
#[cfg(windows)]
pub const NETRC_FILE_NAME: &str = "_netrc";
/// File name of the credential file in the user's home directory.
#[cfg(not(windows))]
pub const NETRC_FILE_NAME: &str = ".netrc";

/// Environment variable front ends read to override the located path.
pub const NETRC_ENV_VAR: &str = "NETRC";

/// Returns the path to the credential file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use netkeep_core::{NETRC_FILE_NAME, get_netrc_path};
///
/// let home = Path::new("/home/user");
/// assert_eq!(get_netrc_path(home), home.join(NETRC_FILE_NAME));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(NETRC_FILE_NAME)
}

/// Returns the path to the credential file in the current user's home
/// directory.
///
/// # Errors
///
/// Returns an I/O error of kind `NotFound` when the home directory cannot be
/// determined.
pub fn locate() -> Result<PathBuf> {
  let base_dirs =
    BaseDirs::new().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "could not determine home directory"))?;
  Ok(get_netrc_path(base_dirs.home_dir()))
}

/// Normalizes a host by removing protocol prefixes and trailing slashes, so
/// URLs can be used to look up machine entries.
///
/// # Examples
///
/// ```
/// use netkeep_core::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("http://jira.example.com"), "jira.example.com");
/// assert_eq!(normalize_host("my-jira-instance.com"), "my-jira-instance.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[cfg(not(windows))]
  fn test_file_name_is_dotfile() {
    assert_eq!(NETRC_FILE_NAME, ".netrc");
  }

  #[test]
  #[cfg(windows)]
  fn test_file_name_is_underscore_prefixed() {
    assert_eq!(NETRC_FILE_NAME, "_netrc");
  }

  #[test]
  fn test_get_netrc_path_joins_home() {
    let path = get_netrc_path(Path::new("/home/user"));
    assert_eq!(path, Path::new("/home/user").join(NETRC_FILE_NAME));
  }

  #[test]
  #[cfg(unix)]
  fn test_locate_uses_home_directory() {
    use netkeep_test_utils::HomeEnvTestGuard;

    let guard = HomeEnvTestGuard::new();

    let path = locate().unwrap();

    assert_eq!(path, guard.home_dir().join(".netrc"));
    assert!(path.is_absolute());
    assert!(!path.exists(), "locating must not create the file");
  }

  #[test]
  fn test_normalize_host_removes_https_and_trailing_slash() {
    assert_eq!(normalize_host("https://api.example.com/"), "api.example.com");
  }

  #[test]
  fn test_normalize_host_removes_http_and_trailing_slash() {
    assert_eq!(normalize_host("http://localhost:8080/"), "localhost:8080");
  }
}
