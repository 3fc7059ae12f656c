//! End-to-end tests: locate the file, check permissions, parse, change the
//! entries and write them back.

use std::fs;
use std::io::Cursor;

use netkeep::{DEFAULT_HOST, Entries, Entry, Netrc, NetrcError, check_permissions, locate};
use netkeep_test_utils::NetrcGuard;

const NETRC: &str = r#"machine mail.example.com
	login joe
	account g
	password secret

machine ray login demo password mypw
default
	login anon
password a@b.com
"#;

#[test]
#[cfg(unix)]
fn test_locate_check_parse_modify_save() {
  let guard = NetrcGuard::new(NETRC);

  let path = locate().unwrap();
  assert_eq!(path, guard.netrc_path());

  check_permissions(&path).unwrap();
  let mut netrc = Netrc::load(&path).unwrap();

  assert_eq!(netrc.len(), 3);
  assert_eq!(netrc.machine("mail.example.com").unwrap(), &Entry::new("joe", "secret").with_account("g"));
  assert_eq!(netrc.machine("ray").unwrap(), &Entry::new("demo", "mypw"));
  assert_eq!(netrc.default_entry().unwrap(), &Entry::new("anon", "a@b.com"));

  netrc.insert("test", Entry::new("testlogin", "testpass"));
  netrc.remove("ray");
  netrc.save(&path).unwrap();

  assert_eq!(
    guard.content(),
    "default\n\tlogin anon\n\tpassword a@b.com\n\n\
     machine mail.example.com\n\taccount g\n\tlogin joe\n\tpassword secret\n\n\
     machine test\n\tlogin testlogin\n\tpassword testpass\n\n"
  );
  assert_eq!(guard.mode(), Some(0o600));
}

#[test]
#[cfg(unix)]
fn test_default_location_round_trip() {
  let guard = NetrcGuard::empty_home();

  let mut netrc = Netrc::load_default().unwrap();
  assert!(netrc.is_empty());
  assert_eq!(guard.mode(), Some(0o600), "a freshly created file is owner-only");

  netrc.set_default(Entry::new("anonymous", "guest"));
  netrc.save_default().unwrap();

  let reloaded = Netrc::load_default().unwrap();
  assert_eq!(reloaded, netrc);
  assert_eq!(reloaded.authenticators("unlisted.example.com").unwrap().login, "anonymous");
}

#[test]
#[cfg(unix)]
fn test_loose_permissions_refuse_before_reading() {
  // Content that would fail to parse proves the file is never read.
  let guard = NetrcGuard::with_mode("macdef broken", 0o644);

  let err = Netrc::load_default().unwrap_err();

  match err {
    NetrcError::InsecurePermissions { path, mode } => {
      assert_eq!(path, guard.netrc_path());
      assert_eq!(mode, 0o644);
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_programmatic_entries_round_trip_through_text() {
  let mut entries = Entries::new();
  entries.insert("mail.example.com".to_string(), Entry::new("joe", "mypw").with_account("gmail"));
  entries.insert("token.example.com".to_string(), Entry::new("", "t0ken"));
  entries.insert(DEFAULT_HOST.to_string(), Entry::new("anonymous", "joe@example.com"));
  let netrc = Netrc::from_entries(entries);

  let mut out = Vec::new();
  netrc.write(&mut out).unwrap();
  let parsed = Netrc::parse(Cursor::new(out)).unwrap();

  assert_eq!(parsed, netrc);
}

#[test]
fn test_save_to_arbitrary_path() {
  let temp_dir = tempfile::TempDir::new().unwrap();
  let path = temp_dir.path().join("nested-override");

  let mut netrc = Netrc::new();
  netrc.insert("mail.example.com", Entry::new("joe", "mypw").with_account("gmail"));
  netrc.save(&path).unwrap();

  assert_eq!(
    fs::read_to_string(&path).unwrap(),
    "machine mail.example.com\n\taccount gmail\n\tlogin joe\n\tpassword mypw\n\n"
  );
}
