//! # Entry Commands
//!
//! List, read, update and remove entries of the credential file.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use netkeep_core::Netrc;
use tracing::debug;

use super::HostArgs;
use crate::output::{format_host, print_info, print_success, print_warning};

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
  #[command(flatten)]
  pub target: HostArgs,

  /// Print the password instead of the login
  #[arg(long)]
  pub password: bool,

  /// Do not fall back to the default entry
  #[arg(long)]
  pub no_default: bool,
}

/// Arguments for the set command
#[derive(Args, Debug)]
#[command(group(
  clap::ArgGroup::new("fields")
    .required(true)
    .multiple(true)
    .args(["login", "password", "password_stdin", "account"]),
))]
pub struct SetArgs {
  #[command(flatten)]
  pub target: HostArgs,

  /// Login name for the entry
  #[arg(long)]
  pub login: Option<String>,

  /// Password or token for the entry
  #[arg(long, conflicts_with = "password_stdin")]
  pub password: Option<String>,

  /// Read the password from the first line of standard input
  #[arg(long)]
  pub password_stdin: bool,

  /// Account name for the entry
  #[arg(long)]
  pub account: Option<String>,
}

/// Arguments for the remove command
#[derive(Args, Debug)]
pub struct RemoveArgs {
  #[command(flatten)]
  pub target: HostArgs,
}

/// Handle the list command
pub(crate) fn handle_list_command(path: &Path) -> Result<()> {
  let netrc = load(path)?;

  if netrc.is_empty() {
    print_info("No entries.");
    return Ok(());
  }

  for (host, entry) in &netrc {
    let login = if entry.login.is_empty() { "-" } else { entry.login.as_str() };
    let password = if entry.password.is_empty() { "" } else { " (password set)" };
    println!("{} {login}{password}", format_host(host));
  }

  Ok(())
}

/// Handle the get command
///
/// Prints the raw value without decoration so it can be used in scripts.
pub(crate) fn handle_get_command(path: &Path, args: GetArgs) -> Result<()> {
  let host = args.target.key()?;
  let netrc = load(path)?;

  let entry = if args.no_default {
    netrc.machine(&host)
  } else {
    netrc.authenticators(&host)
  };

  let Some(entry) = entry else {
    bail!("No entry for {}", entry_name(&host));
  };

  let (field, value) = if args.password {
    ("password", &entry.password)
  } else {
    ("login", &entry.login)
  };

  if value.is_empty() {
    bail!("The entry used for {} has no {field}", entry_name(&host));
  }

  println!("{value}");
  Ok(())
}

/// Handle the set command
///
/// Only the given fields change; an entry that does not exist yet is created.
pub(crate) fn handle_set_command(path: &Path, args: SetArgs) -> Result<()> {
  let host = args.target.key()?;
  let mut netrc = load(path)?;

  let password = if args.password_stdin {
    Some(read_password_from_stdin()?)
  } else {
    args.password
  };

  let mut entry = netrc.machine(&host).cloned().unwrap_or_default();
  let created = netrc.machine(&host).is_none();

  if let Some(login) = args.login {
    entry.login = login;
  }
  if let Some(password) = password {
    entry.password = password;
  }
  if let Some(account) = args.account {
    entry.account = account;
  }

  netrc.insert(host.clone(), entry);
  save(&netrc, path)?;

  if created {
    print_success(&format!("Added {}.", format_host(&host)));
  } else {
    print_success(&format!("Updated {}.", format_host(&host)));
  }

  Ok(())
}

/// Handle the remove command
pub(crate) fn handle_remove_command(path: &Path, args: RemoveArgs) -> Result<()> {
  let host = args.target.key()?;
  let mut netrc = load(path)?;

  if netrc.remove(&host).is_none() {
    print_warning(&format!("No entry for {}; nothing removed.", format_host(&host)));
    return Ok(());
  }

  save(&netrc, path)?;
  print_success(&format!("Removed {}.", format_host(&host)));
  Ok(())
}

fn load(path: &Path) -> Result<Netrc> {
  Netrc::load(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn save(netrc: &Netrc, path: &Path) -> Result<()> {
  netrc
    .save(path)
    .with_context(|| format!("Failed to write {}", path.display()))
}

fn read_password_from_stdin() -> Result<String> {
  let mut line = String::new();
  io::stdin()
    .lock()
    .read_line(&mut line)
    .context("Failed to read password from standard input")?;

  let password = line.trim_end_matches(['\r', '\n']).to_string();
  debug!("Read password from standard input");
  Ok(password)
}

/// Plain name of an entry for error messages.
fn entry_name(host: &str) -> &str {
  if host.is_empty() { "the default entry" } else { host }
}
