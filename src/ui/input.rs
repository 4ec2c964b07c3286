// ABOUTME: Keyboard input - line prompts and arrow-key menu selection
//
// Raw mode is enabled only while waiting for a single key, so line prompts
// and normal printing keep cooked-terminal behavior.

use super::theme;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Stylize;
use crossterm::terminal;
use std::io::{self, Write};

/// Prompt for one line of input, trimmed
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("    {prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Prompt for a line and parse it, re-prompting until the input parses
pub fn read_parsed<T: std::str::FromStr>(prompt: &str) -> io::Result<T> {
    loop {
        let raw = read_line(prompt)?;
        match raw.parse() {
            Ok(value) => return Ok(value),
            Err(_) => theme::warn("Could not read that, try again."),
        }
    }
}

/// Wait for a single key press
pub fn read_key() -> io::Result<KeyCode> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key.code),
            Ok(_) => {}
            Err(err) => break Err(err),
        }
    };
    terminal::disable_raw_mode()?;
    result
}

/// "Press any key" pause
pub fn pause() -> io::Result<()> {
    theme::warn("Press any key to continue...");
    theme::flush();
    read_key()?;
    Ok(())
}

/// Yes/no confirmation; Enter and `y` accept, anything else declines
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("    {prompt} [y/N] ");
    io::stdout().flush()?;
    let key = read_key()?;
    println!();
    Ok(matches!(key, KeyCode::Char('y' | 'Y') | KeyCode::Enter))
}

/// Arrow-key menu over `items`. Returns the chosen index, or None on Esc.
///
/// Digits 1-9 jump straight to an item.
pub fn select(title: &str, items: &[String]) -> io::Result<Option<usize>> {
    let mut choice = 0usize;
    loop {
        theme::clear_screen()?;
        println!();
        theme::print_centered_with(title, title.blue().bold());
        println!();

        for (idx, item) in items.iter().enumerate() {
            let label = format!("{}. {item}", idx + 1);
            if idx == choice {
                let marked = format!(" ➤ {label} ");
                theme::print_centered_with(&marked, marked.as_str().white().on_cyan());
            } else {
                theme::print_centered(&label);
            }
        }

        println!();
        let hint = "Use ↑/↓ and Enter; Esc goes back";
        theme::print_centered_with(hint, hint.grey());
        theme::flush();

        match read_key()? {
            KeyCode::Up => choice = (choice + items.len() - 1) % items.len(),
            KeyCode::Down => choice = (choice + 1) % items.len(),
            KeyCode::Enter => return Ok(Some(choice)),
            KeyCode::Esc => return Ok(None),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let idx = (c as usize - '0' as usize) - 1;
                if idx < items.len() {
                    return Ok(Some(idx));
                }
            }
            _ => {}
        }
    }
}
