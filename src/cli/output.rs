//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (styling is dropped automatically when the stream is
//! not a terminal or NO_COLOR is set):
//! - Green: success, commands
//! - Red: errors
//! - Cyan: hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print a success message with checkmark (green).
///
/// Example: `✓ initialized`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ parameter not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: gantry init`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a hint message to stderr (cyan).
///
/// Used alongside `error` so stdout stays clean when a command fails.
pub fn hint_err(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  namespace  acme`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Format a command string in green.
///
/// Returns a styled string that can be used inline.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}

/// Print a dimmed/secondary message.
///
/// Example: `no environments configured`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Gantry Status
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
