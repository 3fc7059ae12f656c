//! # Netkeep Core Library
//!
//! Reads and writes the per-user machine credential file (`.netrc`, or
//! `_netrc` on Windows). The crate provides the file locator, a permission
//! guard that refuses loosely protected files, a whitespace-token parser and
//! a deterministic writer.
//!
//! ```no_run
//! use netkeep_core::{Entry, Netrc};
//!
//! # fn main() -> netkeep_core::Result<()> {
//! let mut netrc = Netrc::load_default()?;
//! if let Some(entry) = netrc.authenticators("github.com") {
//!   println!("logging in as {}", entry.login);
//! }
//!
//! netrc.insert("example.com", Entry::new("joe", "secret"));
//! netrc.save_default()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod netrc;

pub use error::{NetrcError, Result};
pub use netrc::location::{NETRC_ENV_VAR, NETRC_FILE_NAME, get_netrc_path, locate, normalize_host};
pub use netrc::permissions::{REQUIRED_MODE, check_permissions, has_secure_permissions, set_secure_permissions};
pub use netrc::{Credentials, DEFAULT_HOST, Entries, Entry, Netrc};
