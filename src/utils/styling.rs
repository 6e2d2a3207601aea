//! Terminal styling for launcher status lines

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", ">> ");
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "$ ");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "=> ");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("tex2html").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style("LaTeX / Markdown to standalone HTML via pandoc").dim());
    println!("    {}", style("━".repeat(50)).dim());
}

/// Print the file currently being converted
pub fn print_processing(target: &Path) {
    println!(
        "    {}Processing: {}",
        DOCUMENT,
        style(target.display()).white().bold()
    );
}

/// Print the external command line about to run
pub fn print_command(command_line: &str) {
    println!("    {}Command: {}", GEAR, style(command_line).dim());
}

/// Print the final confirmation naming the produced file
pub fn print_written(output: &Path) {
    println!(
        "    {}HTML is written to: {}",
        SAVE,
        style(output.display()).green().bold()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

/// Shorten a path for fixed-width display, keeping its tail
pub fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - max_len.saturating_sub(3)).collect();
        format!("...{}", tail)
    }
}
