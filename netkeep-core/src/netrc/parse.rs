//! Tokenizer and parser for the netrc grammar.
//!
//! The grammar is whitespace delimited rather than line delimited, so
//! `machine host login user password pass` on one line and the same entry
//! spread over indented lines are read identically.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use tracing::trace;

use super::{DEFAULT_HOST, Entries, Entry};
use crate::error::{NetrcError, Result};

/// A whitespace-delimited token and the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub text: String,
  pub line: usize,
}

/// Streams tokens from a reader one line at a time.
pub struct Tokens<R> {
  lines: io::Lines<R>,
  line: usize,
  buffered: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
  pub fn new(reader: R) -> Self {
    Self {
      lines: reader.lines(),
      line: 0,
      buffered: VecDeque::new(),
    }
  }
}

impl<R: BufRead> Iterator for Tokens<R> {
  type Item = io::Result<Token>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(text) = self.buffered.pop_front() {
        return Some(Ok(Token { text, line: self.line }));
      }

      match self.lines.next()? {
        Ok(line) => {
          self.line += 1;
          self.buffered.extend(line.split_whitespace().map(str::to_owned));
        }
        Err(err) => return Some(Err(err)),
      }
    }
  }
}

/// The entry being accumulated and the host it will be stored under.
type Pending = Option<(String, Entry)>;

/// Parses netrc text into a host to entry mapping.
///
/// `machine` and `default` start a new entry and commit the previous one;
/// `login`, `password` and `account` fill in the entry being built; any other
/// token is skipped. The last entry is committed at end of input. A host that
/// appears twice keeps the entry from its last occurrence.
///
/// # Errors
///
/// Parsing stops at the first problem and no partial mapping is returned:
///
/// * [`NetrcError::UnsupportedMacro`] when a `macdef` keyword is found.
/// * [`NetrcError::ValueOutsideEntry`] when a value keyword comes before any
///   `machine` or `default`.
/// * [`NetrcError::MissingValue`] when `machine` or a value keyword is the
///   final token.
/// * [`NetrcError::Io`] when the reader fails or the input is not UTF-8.
pub fn parse<R: BufRead>(reader: R) -> Result<Entries> {
  let mut tokens = Tokens::new(reader);
  let mut entries = Entries::new();
  let mut pending: Pending = None;

  while let Some(token) = tokens.next() {
    let token = token?;

    match token.text.as_str() {
      "default" => {
        commit(&mut entries, pending.take());
        pending = Some((DEFAULT_HOST.to_string(), Entry::default()));
      }
      "machine" => {
        commit(&mut entries, pending.take());
        let host = next_value(&mut tokens, "machine", token.line)?;
        pending = Some((host, Entry::default()));
      }
      "login" => assign(&mut tokens, &mut pending, "login", token.line, |entry| &mut entry.login)?,
      "password" => assign(&mut tokens, &mut pending, "password", token.line, |entry| &mut entry.password)?,
      "account" => assign(&mut tokens, &mut pending, "account", token.line, |entry| &mut entry.account)?,
      "macdef" => return Err(NetrcError::UnsupportedMacro { line: token.line }),
      _ => trace!("Skipping unrecognized token on line {}", token.line),
    }
  }

  commit(&mut entries, pending);
  Ok(entries)
}

fn commit(entries: &mut Entries, pending: Pending) {
  if let Some((host, entry)) = pending {
    entries.insert(host, entry);
  }
}

fn next_value<R: BufRead>(tokens: &mut Tokens<R>, keyword: &'static str, line: usize) -> Result<String> {
  match tokens.next() {
    Some(token) => Ok(token?.text),
    None => Err(NetrcError::MissingValue { keyword, line }),
  }
}

fn assign<R: BufRead>(
  tokens: &mut Tokens<R>,
  pending: &mut Pending,
  keyword: &'static str,
  line: usize,
  field: fn(&mut Entry) -> &mut String,
) -> Result<()> {
  let Some((_, entry)) = pending.as_mut() else {
    return Err(NetrcError::ValueOutsideEntry { keyword, line });
  };

  *field(entry) = next_value(tokens, keyword, line)?;
  Ok(())
}
