//! # Netkeep
//!
//! Facade over [`netkeep_core`] for consumers that only need to look up or
//! store machine credentials.
//!
//! The usual flow locates the file, runs the permission guard and parses it,
//! then writes the mapping back after changes:
//!
//! ```no_run
//! use netkeep::{Entry, Netrc, locate};
//!
//! # fn main() -> netkeep::Result<()> {
//! let path = locate()?;
//! let mut netrc = Netrc::load(&path)?;
//! netrc.insert("ftp.example.com", Entry::new("anonymous", "guest"));
//! netrc.save(&path)?;
//! # Ok(())
//! # }
//! ```

pub use netkeep_core::*;
