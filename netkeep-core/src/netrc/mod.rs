//! # Netrc Credential Files
//!
//! In-memory model of a `.netrc` file together with the operations that move
//! it to and from disk.
//!
//! A file maps host names to an [`Entry`] holding a login, password and
//! account. The empty host name ([`DEFAULT_HOST`]) stores the `default`
//! entry, which applies when no machine matches.

pub mod location;
mod parse;
pub mod permissions;
mod write;

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::debug;

pub use self::parse::{Token, Tokens, parse};
pub use self::write::write;
use crate::error::Result;

/// Key under which the `default` entry is stored.
pub const DEFAULT_HOST: &str = "";

/// Login, password and account for one machine. Empty fields are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
  pub login: String,
  pub password: String,
  pub account: String,
}

/// Username and password pair for clients that need both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl Entry {
  /// Create an entry with a login and password and no account.
  pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      login: login.into(),
      password: password.into(),
      account: String::new(),
    }
  }

  /// Set the account name.
  pub fn with_account(mut self, account: impl Into<String>) -> Self {
    self.account = account.into();
    self
  }

  /// True when no field carries a value.
  pub fn is_empty(&self) -> bool {
    self.login.is_empty() && self.password.is_empty() && self.account.is_empty()
  }

  /// Returns the login/password pair, or `None` if either is missing.
  pub fn credentials(&self) -> Option<Credentials> {
    if self.login.is_empty() || self.password.is_empty() {
      return None;
    }

    Some(Credentials {
      username: self.login.clone(),
      password: self.password.clone(),
    })
  }
}

/// Host name to entry mapping. Ordered so that output is deterministic.
pub type Entries = BTreeMap<String, Entry>;

/// The contents of a netrc file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netrc {
  entries: Entries,
}

impl Netrc {
  /// Create an empty file model.
  pub fn new() -> Self {
    Self::default()
  }

  /// Wrap an existing mapping.
  pub const fn from_entries(entries: Entries) -> Self {
    Self { entries }
  }

  /// Borrow the underlying mapping.
  pub const fn entries(&self) -> &Entries {
    &self.entries
  }

  /// Consume the model and return the mapping.
  pub fn into_entries(self) -> Entries {
    self.entries
  }

  /// Entry for exactly `host`. Does not fall back to the default entry.
  pub fn machine(&self, host: &str) -> Option<&Entry> {
    self.entries.get(host)
  }

  /// The `default` entry, if the file has one.
  pub fn default_entry(&self) -> Option<&Entry> {
    self.entries.get(DEFAULT_HOST)
  }

  /// Entry to authenticate against `host`: the exact machine entry, or the
  /// default entry when the host is not listed.
  pub fn authenticators(&self, host: &str) -> Option<&Entry> {
    self.machine(host).or_else(|| self.default_entry())
  }

  /// Add or replace the entry for `host`, returning the previous one.
  pub fn insert(&mut self, host: impl Into<String>, entry: Entry) -> Option<Entry> {
    self.entries.insert(host.into(), entry)
  }

  /// Add or replace the default entry, returning the previous one.
  pub fn set_default(&mut self, entry: Entry) -> Option<Entry> {
    self.insert(DEFAULT_HOST, entry)
  }

  /// Remove the entry for `host`.
  pub fn remove(&mut self, host: &str) -> Option<Entry> {
    self.entries.remove(host)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterate over `(host, entry)` pairs in output order.
  pub fn iter(&self) -> btree_map::Iter<'_, String, Entry> {
    self.entries.iter()
  }

  /// Parse netrc text from any reader.
  pub fn parse<R: Read>(reader: R) -> Result<Self> {
    parse(BufReader::new(reader)).map(Self::from_entries)
  }

  /// Serialize to any writer.
  pub fn write<W: Write>(&self, writer: W) -> Result<()> {
    write(&self.entries, writer)
  }

  /// Read the file at `path`.
  ///
  /// The permission guard runs first; a file readable or writable by anyone
  /// but its owner is rejected before its contents are opened. A missing file
  /// is created empty with mode `0600`.
  ///
  /// # Errors
  ///
  /// Returns [`NetrcError::InsecurePermissions`](crate::NetrcError) for loose
  /// permissions, a parse error for malformed or unsupported input, and
  /// [`NetrcError::Io`](crate::NetrcError) when the file cannot be opened or
  /// read.
  pub fn load(path: &Path) -> Result<Self> {
    permissions::check_permissions(path)?;

    let file = permissions::open_or_create(path)?;
    let netrc = Self::parse(file)?;

    debug!("Loaded {} netrc entries from {}", netrc.len(), path.display());
    Ok(netrc)
  }

  /// Truncate the file at `path` and write every entry to it. A new file is
  /// created with mode `0600`.
  ///
  /// Entries that cannot be written are rejected before the file is touched,
  /// so the previous content survives.
  pub fn save(&self, path: &Path) -> Result<()> {
    write::validate(&self.entries)?;

    let file = permissions::create_truncated(path)?;
    self.write(file)?;

    debug!("Saved {} netrc entries to {}", self.len(), path.display());
    Ok(())
  }

  /// [`Netrc::load`] against the conventional location.
  pub fn load_default() -> Result<Self> {
    Self::load(&location::locate()?)
  }

  /// [`Netrc::save`] against the conventional location.
  pub fn save_default(&self) -> Result<()> {
    self.save(&location::locate()?)
  }
}

impl From<Entries> for Netrc {
  fn from(entries: Entries) -> Self {
    Self::from_entries(entries)
  }
}

impl<'a> IntoIterator for &'a Netrc {
  type Item = (&'a String, &'a Entry);
  type IntoIter = btree_map::Iter<'a, String, Entry>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;
  use crate::NetrcError;

  fn sample() -> Netrc {
    let mut netrc = Netrc::new();
    netrc.insert("github.com", Entry::new("octocat", "gh-token"));
    netrc.set_default(Entry::new("anonymous", "joe@example.com"));
    netrc
  }

  #[test]
  fn test_entry_credentials_requires_login_and_password() {
    assert_eq!(
      Entry::new("user", "pass").credentials(),
      Some(Credentials {
        username: "user".to_string(),
        password: "pass".to_string(),
      })
    );

    let login_only = Entry {
      login: "user".to_string(),
      ..Default::default()
    };
    assert!(login_only.credentials().is_none());
    assert!(Entry::default().credentials().is_none());
  }

  #[test]
  fn test_entry_is_empty() {
    assert!(Entry::default().is_empty());
    assert!(!Entry::default().with_account("acct").is_empty());
  }

  #[test]
  fn test_machine_does_not_fall_back_to_default() {
    let netrc = sample();

    assert_eq!(netrc.machine("github.com").unwrap().login, "octocat");
    assert!(netrc.machine("gitlab.com").is_none());
  }

  #[test]
  fn test_authenticators_falls_back_to_default() {
    let netrc = sample();

    assert_eq!(netrc.authenticators("github.com").unwrap().login, "octocat");
    assert_eq!(netrc.authenticators("gitlab.com").unwrap().login, "anonymous");
  }

  #[test]
  fn test_authenticators_without_default() {
    let mut netrc = sample();
    netrc.remove(DEFAULT_HOST);

    assert!(netrc.authenticators("gitlab.com").is_none());
    assert!(netrc.default_entry().is_none());
  }

  #[test]
  fn test_insert_replaces_existing_entry() {
    let mut netrc = sample();

    let previous = netrc.insert("github.com", Entry::new("someone", "else"));

    assert_eq!(previous.unwrap().login, "octocat");
    assert_eq!(netrc.machine("github.com").unwrap().login, "someone");
    assert_eq!(netrc.len(), 2);
  }

  #[test]
  fn test_iteration_puts_default_first() {
    let netrc = sample();
    let hosts: Vec<&str> = netrc.iter().map(|(host, _)| host.as_str()).collect();

    assert_eq!(hosts, vec!["", "github.com"]);
  }

  #[test]
  fn test_load_missing_file_creates_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".netrc");

    let netrc = Netrc::load(&path).unwrap();

    assert!(netrc.is_empty());
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
  }

  #[test]
  #[cfg(unix)]
  fn test_load_created_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".netrc");

    Netrc::load(&path).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
  }

  #[test]
  fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".netrc");
    let netrc = sample();

    netrc.save(&path).unwrap();
    let loaded = Netrc::load(&path).unwrap();

    assert_eq!(loaded, netrc);
  }

  #[test]
  fn test_save_truncates_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".netrc");

    sample().save(&path).unwrap();

    let mut smaller = Netrc::new();
    smaller.insert("ray", Entry::new("demo", "mypw"));
    smaller.save(&path).unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "machine ray\n\tlogin demo\n\tpassword mypw\n\n"
    );
  }

  #[test]
  fn test_save_rejected_entries_leave_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".netrc");
    sample().save(&path).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let mut netrc = sample();
    netrc.insert("github.com", Entry::new("octocat", "two words"));
    let err = netrc.save(&path).unwrap_err();

    assert!(matches!(err, NetrcError::UnwritableValue { field: "password", .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
  }

  #[test]
  #[cfg(unix)]
  fn test_load_refuses_insecure_file() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".netrc");
    fs::write(&path, "machine example.com login user password pass\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    let err = Netrc::load(&path).unwrap_err();

    assert!(matches!(err, NetrcError::InsecurePermissions { mode: 0o644, .. }));
  }

  #[test]
  fn test_load_propagates_parse_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".netrc");
    Netrc::new().save(&path).unwrap();
    fs::write(&path, "machine example.com\nmacdef init\n").unwrap();

    let err = Netrc::load(&path).unwrap_err();

    assert!(matches!(err, NetrcError::UnsupportedMacro { line: 2 }));
  }
}
