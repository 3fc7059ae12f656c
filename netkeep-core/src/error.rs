//! Error type shared by every netrc operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while locating, checking, parsing or writing a netrc file.
#[derive(Debug, Error)]
pub enum NetrcError {
  /// The file exists but is accessible to someone other than its owner.
  #[error("refusing to read {}: permissions are {mode:04o}, expected 0600", .path.display())]
  InsecurePermissions { path: PathBuf, mode: u32 },

  /// A `macdef` block was found. Macro definitions are not supported.
  #[error("line {line}: macro definitions (`macdef`) are not supported")]
  UnsupportedMacro { line: usize },

  /// A value keyword appeared before any `machine` or `default` token.
  #[error("line {line}: `{keyword}` appears before any `machine` or `default` entry")]
  ValueOutsideEntry { keyword: &'static str, line: usize },

  /// A keyword that takes a value was the last token of the input.
  #[error("line {line}: `{keyword}` is missing its value")]
  MissingValue { keyword: &'static str, line: usize },

  /// A host name or value holds whitespace, which the grammar has no way to
  /// quote. Writing it would produce a file that reads back differently.
  #[error("{entry}: the {field} contains whitespace and cannot be written")]
  UnwritableValue { entry: String, field: &'static str },

  /// Wrapper for failures of the underlying file or stream.
  #[error(transparent)]
  Io(#[from] io::Error),
}

impl NetrcError {
  /// Whether the error describes input that does not follow the grammar.
  pub const fn is_malformed(&self) -> bool {
    matches!(self, Self::ValueOutsideEntry { .. } | Self::MissingValue { .. })
  }
}

pub type Result<T> = std::result::Result<T, NetrcError>;
