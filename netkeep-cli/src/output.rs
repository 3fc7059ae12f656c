//! # Output Formatting
//!
//! Colored status lines and value formatting for user-facing output.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode to all subsequent colored output.
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Let owo_colors detect terminal support on its own
      Self::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", paint(&check, Stream::Stdout, Style::new().green().bold()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", paint(&cross, Stream::Stderr, Style::new().red().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", paint(&warning, Stream::Stdout, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", paint(&info, Stream::Stdout, Style::new().blue().bold()), message);
}

/// Format a file path
pub fn format_path(path: &str) -> String {
  paint(path, Stream::Stdout, Style::new().bright_green())
}

/// Format a host name; the default entry is shown as `default`
pub fn format_host(host: &str) -> String {
  if host.is_empty() {
    paint("default", Stream::Stdout, Style::new().italic())
  } else {
    paint(host, Stream::Stdout, Style::new().bright_cyan().bold())
  }
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  paint(cmd, Stream::Stdout, Style::new().purple())
}

/// Style `text` when `stream` supports colors or colors are forced on.
fn paint(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |text| text.style(style)).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    let result = get_emoji_or_default("check_mark", "✓");
    assert!(!result.is_empty());

    let result = get_emoji_or_default("nonexistent_emoji", "fallback");
    assert_eq!(result, "fallback");
  }

  #[test]
  fn test_format_host_names_default_entry() {
    owo_colors::set_override(false);

    assert_eq!(format_host(""), "default");
    assert_eq!(format_host("github.com"), "github.com");
    assert_eq!(format_command("chmod 600 ~/.netrc"), "chmod 600 ~/.netrc");
  }
}
