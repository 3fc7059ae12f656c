//! # Path and Check Commands
//!
//! Report where the credential file lives and whether it is safe to use.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use netkeep_core::{Netrc, NetrcError, check_permissions, has_secure_permissions, set_secure_permissions};
use tracing::info;

use crate::output::{format_command, format_host, format_path, print_error, print_info, print_success, print_warning};

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Tighten loose permissions to 600 instead of failing
  #[arg(long)]
  pub fix: bool,
}

/// Handle the path command
pub(crate) fn handle_path_command(path: &Path) -> Result<()> {
  println!("{}", path.display());
  Ok(())
}

/// Handle the check command
///
/// Runs the permission guard, then parses the file and reports entries that
/// lack a login or password. The file is never created by this command.
pub(crate) fn handle_check_command(path: &Path, args: CheckArgs) -> Result<()> {
  let display_path = path.display().to_string();

  if !path.exists() {
    print_warning(&format!("No credential file found at {}.", format_path(&display_path)));
    return Ok(());
  }

  match check_permissions(path) {
    Ok(()) => {}
    Err(NetrcError::InsecurePermissions { mode, .. }) if args.fix => {
      fix_permissions(path)?;
      print_success(&format!(
        "Changed permissions of {} from {mode:04o} to 0600.",
        format_path(&display_path)
      ));
    }
    Err(err) => {
      if matches!(err, NetrcError::InsecurePermissions { .. }) {
        print_error("The credential file has insecure permissions.");
        print_info(&format!(
          "Restrict it to your user with: {} or {}",
          format_command(&format!("chmod 600 {display_path}")),
          format_command("netkeep check --fix")
        ));
      }
      return Err(err).context("Permission check failed");
    }
  }
  print_success(&format!("{} has secure permissions.", format_path(&display_path)));

  let netrc = Netrc::load(path).with_context(|| format!("Failed to parse {display_path}"))?;
  print_success(&format!("Parsed {} entries.", netrc.len()));

  for (host, entry) in &netrc {
    if entry.credentials().is_none() {
      print_warning(&format!("{} is missing a login or password.", format_host(host)));
    }
  }

  Ok(())
}

/// Restrict the file to its owner and confirm the guard now accepts it.
fn fix_permissions(path: &Path) -> Result<()> {
  info!("Restricting {} to mode 0600", path.display());
  set_secure_permissions(path).with_context(|| format!("Failed to change permissions of {}", path.display()))?;

  if !has_secure_permissions(path)? {
    bail!("{} still has insecure permissions", path.display());
  }

  Ok(())
}
