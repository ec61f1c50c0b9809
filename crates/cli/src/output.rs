//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a dollar amount
pub fn format_cost(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a dollar amount, marking overspend against a threshold
pub fn color_cost(amount: f64, threshold: Option<f64>) -> String {
    let formatted = format_cost(amount);
    match threshold {
        Some(max) if amount > max => format!(
            "{} {}",
            formatted.red().bold(),
            format!("(+{} over limit)", format_cost(amount - max)).red()
        ),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(12.5), "$12.50");
        assert_eq!(format_cost(0.0), "$0.00");
    }

    #[test]
    fn test_color_cost_under_threshold_is_plain() {
        assert_eq!(color_cost(5.0, Some(8.0)), "$5.00");
        assert_eq!(color_cost(5.0, None), "$5.00");
    }

    #[test]
    fn test_color_cost_over_threshold_mentions_overflow() {
        colored::control::set_override(false);
        let formatted = color_cost(12.0, Some(8.0));
        assert!(formatted.contains("$12.00"));
        assert!(formatted.contains("+$4.00 over limit"));
        colored::control::unset_override();
    }
}
