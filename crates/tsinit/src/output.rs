//! Terminal output for the scaffolder
//!
//! Status lines go to stdout, problems to stderr so they survive when the
//! summary is piped.

use console::{style, Style};

/// Print a completed step
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print a terminal failure
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a notice the user should act on
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), style(msg).yellow());
}

/// Print a section lead-in
pub fn info(msg: &str) {
    println!("{} {}", style("→").cyan().bold(), msg);
}

/// Print the banner for a command, underlined to its own width
pub fn header(title: &str) {
    let banner = Style::new().cyan().bold();
    println!();
    println!("{}", banner.apply_to(title));
    println!("{}", style("─".repeat(title.chars().count())).dim());
}

/// Print a labelled value, labels padded to a common column
pub fn kv(key: &str, value: &str) {
    println!("  {:<16} {}", style(format!("{}:", key)).dim(), value);
}

/// Print one numbered follow-up command
pub fn step(number: usize, command: &str) {
    println!("  {}. {}", style(number).bold(), style(command).cyan());
}
