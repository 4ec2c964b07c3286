// ABOUTME: Console output helpers - centered, colored text for the menu screens

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};

/// Current terminal width in columns, defaulting to 80
pub fn width() -> usize {
    terminal::size().map_or(80, |(cols, _)| cols as usize)
}

/// Clear the screen and move the cursor home
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Left padding that centers `text` in the terminal
fn padding_for(text: &str) -> String {
    let cols = width();
    let len = text.chars().count();
    let pad = cols.saturating_sub(len) / 2;
    " ".repeat(pad)
}

/// Print a line centered in the terminal
pub fn print_centered(text: &str) {
    println!("{}{text}", padding_for(text));
}

/// Print a styled line centered by the width of its plain text, so ANSI
/// escape sequences do not skew the padding
pub fn print_centered_with(plain: &str, styled: impl std::fmt::Display) {
    println!("{}{styled}", padding_for(plain));
}

/// Centered cyan separator line
pub fn print_separator() {
    let line = "─".repeat(51);
    println!("{}{}", padding_for(&line), line.as_str().cyan());
}

/// Centered operation title between separators
pub fn print_title(title: &str) {
    println!();
    print_separator();
    println!("{}{}", padding_for(title), title.cyan().bold());
    print_separator();
    println!();
}

/// Startup banner
pub fn print_banner(subtitle: &str) {
    let frame = "═".repeat(51);
    println!();
    println!("{}{}", padding_for(&frame), frame.as_str().cyan());
    print_centered_styled("Mobile Hall Storefront", |s| s.green().bold());
    println!("{}{subtitle}", padding_for(subtitle));
    println!("{}{}", padding_for(&frame), frame.as_str().cyan());
    println!();
}

fn print_centered_styled<F>(text: &str, style: F)
where
    F: FnOnce(&str) -> crossterm::style::StyledContent<&str>,
{
    println!("{}{}", padding_for(text), style(text));
}

/// Green success line
pub fn success(message: &str) {
    println!("    {} {}", "✓".green().bold(), message.green());
}

/// Red failure line
pub fn error(message: &str) {
    println!("    {} {}", "✗".red().bold(), message.red());
}

/// Yellow notice line
pub fn warn(message: &str) {
    println!("    {}", message.yellow());
}

/// Plain indented line
pub fn line(message: &str) {
    println!("    {message}");
}

/// Labeled field in a detail view
pub fn field(label: &str, value: &str) {
    println!("    {} {value}", format!("{label}:").bold());
}

/// Flush stdout, ignoring failure (display only)
pub fn flush() {
    let _ = io::stdout().flush();
}
