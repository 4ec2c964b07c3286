// ABOUTME: Console user interface - main menu loop and screen dispatch

pub mod input;
pub mod phone_screens;
pub mod subscriber_screens;
pub mod theme;

use crate::app::App;
use anyhow::Result;

const MENU_ITEMS: [&str; 9] = [
    "Add subscriber",
    "Find subscriber",
    "Register number",
    "Release number",
    "Modify subscriber",
    "Delete subscriber",
    "List subscribers",
    "Save data",
    "Exit",
];

/// Main menu loop. Runs until Exit is chosen, then saves and returns.
pub fn run(app: &mut App) -> Result<()> {
    theme::clear_screen()?;
    theme::print_banner("Subscriber and Number Desk");
    theme::line(&format!(
        "{} subscriber(s), {} number(s) available.",
        app.subscribers.len(),
        app.pool.available_count()
    ));
    input::pause()?;

    let items: Vec<String> = MENU_ITEMS.iter().map(ToString::to_string).collect();
    loop {
        let choice = input::select("Main Menu", &items)?;
        match choice {
            Some(0) => subscriber_screens::add(app)?,
            Some(1) => subscriber_screens::find(app)?,
            Some(2) => phone_screens::register(app)?,
            Some(3) => phone_screens::release(app)?,
            Some(4) => subscriber_screens::modify(app)?,
            Some(5) => subscriber_screens::delete(app)?,
            Some(6) => subscriber_screens::list(app)?,
            Some(7) => {
                theme::print_title("Save Data");
                match app.save() {
                    Ok(()) => theme::success("All data saved."),
                    Err(err) => theme::error(&format!("{err:#}")),
                }
                input::pause()?;
            }
            Some(_) | None => break,
        }
    }

    theme::print_title("Goodbye");
    app.save()?;
    theme::success("Data saved. See you next time.");
    Ok(())
}
