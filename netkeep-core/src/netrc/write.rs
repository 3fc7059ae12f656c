//! Serializes entries back into the netrc grammar.

use std::io::{BufWriter, Write};

use super::{DEFAULT_HOST, Entries, Entry};
use crate::error::{NetrcError, Result};

/// Writes every entry to `writer`.
///
/// Each entry starts with `default` or `machine <host>`, followed by its
/// non-empty `account`, `login` and `password` on tab-indented lines in that
/// order, and ends with a blank line. The output is regenerated from the
/// fields alone, so formatting from a previously parsed file is not kept.
///
/// # Errors
///
/// Returns [`NetrcError::UnwritableValue`] before anything is written if a
/// host or value contains whitespace, and [`NetrcError::Io`] if writing or
/// flushing fails.
pub fn write<W: Write>(entries: &Entries, writer: W) -> Result<()> {
  validate(entries)?;

  let mut writer = BufWriter::new(writer);

  for (host, entry) in entries {
    if host == DEFAULT_HOST {
      writeln!(writer, "default")?;
    } else {
      writeln!(writer, "machine {host}")?;
    }

    for (keyword, value) in fields(entry) {
      if !value.is_empty() {
        writeln!(writer, "\t{keyword} {value}")?;
      }
    }

    writeln!(writer)?;
  }

  writer.flush()?;
  Ok(())
}

/// Check that every host and value is a single token the parser reads back
/// unchanged.
pub fn validate(entries: &Entries) -> Result<()> {
  for (host, entry) in entries {
    let name = || {
      if host == DEFAULT_HOST {
        "default".to_string()
      } else {
        format!("machine {host}")
      }
    };

    if host.contains(char::is_whitespace) {
      return Err(NetrcError::UnwritableValue {
        entry: name(),
        field: "host",
      });
    }

    for (keyword, value) in fields(entry) {
      if value.contains(char::is_whitespace) {
        return Err(NetrcError::UnwritableValue {
          entry: name(),
          field: keyword,
        });
      }
    }
  }

  Ok(())
}

/// Value fields in output order.
fn fields(entry: &Entry) -> [(&'static str, &String); 3] {
  [
    ("account", &entry.account),
    ("login", &entry.login),
    ("password", &entry.password),
  ]
}
