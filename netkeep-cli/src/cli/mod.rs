//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the netkeep tool.

mod check;
mod entries;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use netkeep_core::{DEFAULT_HOST, NETRC_ENV_VAR, locate, normalize_host};
use tracing::info;

use crate::output::ColorMode;

/// Top-level CLI command for the netkeep tool
#[derive(Parser)]
#[command(name = "netkeep")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Inspect and edit your .netrc credential file")]
#[command(
  long_about = "Netkeep reads and writes the per-user .netrc file that stores login names,\n\
        passwords and account names for remote hosts.\n\n\
        Files that other users can read or write are refused; keep the file at mode 600."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Credential file to use instead of the one in your home directory
  #[arg(long, short = 'f', global = true, env = NETRC_ENV_VAR, value_name = "PATH")]
  pub file: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the netkeep tool
#[derive(Subcommand)]
pub enum Commands {
  /// Print the location of the credential file
  Path,

  /// Verify file permissions and syntax
  #[command(long_about = "Checks that the credential file is readable only by you and parses cleanly.\n\n\
            Entries that lack a login or a password are reported, since most clients\n\
            need both to authenticate. With --fix, loose permissions are tightened to 600.")]
  Check(check::CheckArgs),

  /// List the hosts that have entries
  #[command(long_about = "Lists every entry with its login. Passwords are never printed.")]
  #[command(alias = "ls")]
  List,

  /// Print the login or password for a host
  #[command(long_about = "Prints the login for a host, or its password with --password.\n\n\
            Hosts without their own entry fall back to the default entry unless\n\
            --no-default is given. URLs are accepted in place of host names.")]
  Get(entries::GetArgs),

  /// Add or update an entry
  #[command(long_about = "Adds an entry or updates fields of an existing one.\n\n\
            Fields that are not given keep their current value. Use --password-stdin to\n\
            keep the secret out of your shell history.")]
  Set(entries::SetArgs),

  /// Remove an entry
  #[command(alias = "rm")]
  Remove(entries::RemoveArgs),
}

/// Host selection shared by subcommands: a host name or `--default`.
#[derive(clap::Args, Debug)]
pub struct HostArgs {
  /// Host name or URL of the entry
  #[arg(required_unless_present = "default", conflicts_with = "default")]
  pub host: Option<String>,

  /// Use the default entry instead of a host
  #[arg(long)]
  pub default: bool,
}

impl HostArgs {
  /// The key of the selected entry in the credential file
  ///
  /// Only `--default` selects the default entry. A host that is empty after
  /// normalization (`""`, `https://`) is an error.
  pub fn key(&self) -> Result<String> {
    let host = match &self.host {
      Some(host) if !self.default => normalize_host(host),
      _ => return Ok(DEFAULT_HOST.to_string()),
    };

    if host.is_empty() {
      bail!("Host must not be empty; use --default for the default entry");
    }

    Ok(host)
  }
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let path = match cli.file {
    Some(path) => path,
    None => locate().context("Failed to locate the credential file")?,
  };
  info!("Using credential file {}", path.display());

  match cli.command {
    Commands::Path => check::handle_path_command(&path),
    Commands::Check(args) => check::handle_check_command(&path, args),
    Commands::List => entries::handle_list_command(&path),
    Commands::Get(args) => entries::handle_get_command(&path, args),
    Commands::Set(args) => entries::handle_set_command(&path, args),
    Commands::Remove(args) => entries::handle_remove_command(&path, args),
  }
}
