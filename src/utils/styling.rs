//! Terminal styling utilities for step-by-step console output

use console::{style, Emoji};

use crate::report::Finding;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FLOWER: Emoji<'_, '_> = Emoji("🌸 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static SOURCE: Emoji<'_, '_> = Emoji("📂 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        FLOWER,
        style("iris-eda").magenta().bold()
    );
    println!(
        "    {}",
        style("Exploratory analysis of the Iris dataset").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print where the data comes from
pub fn print_source(source: &str) {
    println!("    {} Source: {}", SOURCE, style(source).cyan());
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a sub-heading inside a step
pub fn print_section(title: &str) {
    println!();
    println!("    {} {}", style("✧").cyan(), style(title).bold());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print an error with its category to stderr
pub fn print_error(category: &str, detail: &str) {
    eprintln!(
        "    {} {} {}",
        style("✗").red().bold(),
        style(format!("{}:", category)).red().bold(),
        detail
    );
}

/// Print one observation, flagged when the computed statistics disagree
pub fn print_finding(finding: &Finding) {
    if finding.supported {
        println!("    {} {}", style("•").green(), finding.text);
    } else {
        println!(
            "    {} {} {}",
            style("•").yellow(),
            finding.text,
            style("(not supported by the computed statistics)").yellow()
        );
    }
}

/// Print a one-line chart description
pub fn print_chart_summary(summary: &str) {
    println!("    {} {}", CHART, summary);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        FLOWER,
        style("Analysis complete!").green().bold()
    );
    println!();
}
