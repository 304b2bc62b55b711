//! Display utilities for the CLI

use colored::*;
use fraudscope_dashboard::{CardTone, StatCard};
use fraudscope_types::ThreatLevel;

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", "━".repeat(60).bright_black());
    println!(" {}", title.bright_white().bold());
    println!("{}", "━".repeat(60).bright_black());
}

/// Print a success message
pub fn success(message: &str) {
    println!("  {} {}", "✓".bright_green(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("  {} {}", "→".bright_blue(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message.yellow());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("      {}: {}", key, value.bright_cyan());
}

/// Print a labeled value
pub fn labeled(label: &str, value: &str) {
    println!("  {}: {}", label.bright_white(), value.bright_cyan());
}

/// Print a row of stat cards, one per line
pub fn cards(cards: &[StatCard]) {
    for card in cards {
        let value = match card.tone {
            CardTone::Neutral => card.value.bright_cyan(),
            CardTone::Warning => card.value.yellow(),
            CardTone::Danger => card.value.bright_red(),
        };
        println!(
            "  {:<22} {:>14}  {}",
            card.label.bright_white(),
            value.bold(),
            card.hint.bright_black()
        );
    }
}

/// Print a column header line
pub fn table_header(header: &str) {
    println!("  {}", header.bright_white().bold());
    println!("  {}", "─".repeat(header.chars().count()).bright_black());
}

/// Threat label padded to `width`, in its fixed color
pub fn threat(level: ThreatLevel, width: usize) -> ColoredString {
    let label = format!("{:<width$}", level.label(), width = width);
    match level {
        ThreatLevel::Critical => label.bright_red().bold(),
        ThreatLevel::High => label.red(),
        ThreatLevel::Elevated => label.yellow(),
        ThreatLevel::Low => label.green(),
        ThreatLevel::Unknown => label.normal(),
    }
}

/// Risk score padded to `width`, colored by band
pub fn risk(score: f64, width: usize) -> ColoredString {
    let text = format!("{:>width$.1}", score, width = width);
    if score >= 80.0 {
        text.bright_red()
    } else if score >= 60.0 {
        text.red()
    } else if score >= 40.0 {
        text.yellow()
    } else {
        text.green()
    }
}
