// ABOUTME: Interactive screens for registering and releasing phone numbers
//
// Registration offers three paths to a number: typing one directly, taking a
// random pick from the whole pool, or browsing category -> segment -> sampled
// shortlist. All of them end in the same bind call.

use super::{input, theme};
use crate::app::App;
use crate::pool::{catalog::sort_lexicographic, SubscriberId, MAX_PER_SUBSCRIBER};
use anyhow::Result;
use crossterm::event::KeyCode;

/// Bind a number to a subscriber, chosen directly, at random, or by browsing
pub fn register(app: &mut App) -> Result<()> {
    theme::print_title("Register Number");
    let Some(subscriber) = lookup_subscriber(app)? else {
        input::pause()?;
        return Ok(());
    };

    let held = app.pool.count_for(subscriber);
    if held >= MAX_PER_SUBSCRIBER {
        theme::error(&format!(
            "This subscriber already holds {MAX_PER_SUBSCRIBER} numbers."
        ));
        input::pause()?;
        return Ok(());
    }
    theme::line(&format!(
        "Currently holds {held} of {MAX_PER_SUBSCRIBER} numbers."
    ));

    let modes = [
        "Enter a number directly".to_string(),
        "Take a random available number".to_string(),
        "Browse by category and segment".to_string(),
    ];
    let chosen = match input::select("How to Pick a Number", &modes)? {
        Some(0) => {
            theme::print_title("Register Number");
            Some(input::read_line("Number (11 digits): ")?)
        }
        Some(1) => pick_random(app)?,
        Some(_) => browse(app)?,
        None => None,
    };

    let Some(number) = chosen else {
        theme::line("No number chosen.");
        input::pause()?;
        return Ok(());
    };

    match app.pool.bind(subscriber, &number) {
        Ok(()) => theme::success(&format!("{number} registered.")),
        Err(err) => theme::error(&err.to_string()),
    }
    input::pause()?;
    Ok(())
}

/// Release one of a subscriber's numbers back to the pool
pub fn release(app: &mut App) -> Result<()> {
    theme::print_title("Release Number");
    let Some(subscriber) = lookup_subscriber(app)? else {
        input::pause()?;
        return Ok(());
    };

    let numbers = app.pool.list_for(subscriber);
    if numbers.is_empty() {
        theme::error("This subscriber holds no numbers.");
        input::pause()?;
        return Ok(());
    }

    let Some(idx) = input::select("Number to Release", &numbers)? else {
        return Ok(());
    };
    let number = &numbers[idx];
    if !input::confirm(&format!("Release {number}?"))? {
        theme::line("Nothing released.");
        input::pause()?;
        return Ok(());
    }

    match app.pool.unbind(subscriber, number) {
        Ok(()) => theme::success(&format!("{number} released.")),
        Err(err) => theme::error(&err.to_string()),
    }
    input::pause()?;
    Ok(())
}

/// Resolve a subscriber from an id card prompt
fn lookup_subscriber(app: &App) -> Result<Option<SubscriberId>> {
    let id_card_value = input::read_line("Id card of the subscriber: ")?;
    match app.subscribers.find_by_id_card(&id_card_value) {
        Some(id) => {
            if let Some(subscriber) = app.subscribers.get(id) {
                theme::line(&format!("Subscriber: {}", subscriber.name));
            }
            Ok(Some(id))
        }
        None => {
            theme::error("No matching subscriber.");
            Ok(None)
        }
    }
}

/// One random available number, shown for confirmation
fn pick_random(app: &App) -> Result<Option<String>> {
    let picked = app.pool.sample_available(1);
    let Some(number) = picked.into_iter().next() else {
        theme::error("No numbers are available.");
        return Ok(None);
    };
    theme::print_title("Register Number");
    theme::line(&format!("Random pick: {number}"));
    if input::confirm("Take this number?")? {
        Ok(Some(number))
    } else {
        Ok(None)
    }
}

/// Category -> segment -> sampled shortlist drill-down
fn browse(app: &App) -> Result<Option<String>> {
    let limits = &app.config.browse;
    'category: loop {
        let categories = app.pool.categories(limits.max_categories);
        let category_items: Vec<String> = categories
            .iter()
            .map(|c| format!("{c}xxx  ({} available)", app.pool.count_by_category(c)))
            .collect();
        let Some(cat_idx) = input::select("Number Categories", &category_items)? else {
            return Ok(None);
        };
        let category = &categories[cat_idx];

        'segment: loop {
            let segments = app.pool.segments_of(category, limits.max_segments);
            if segments.is_empty() {
                theme::error("No segments available in that category.");
                continue 'category;
            }
            let segment_items: Vec<String> = segments
                .iter()
                .map(|s| format!("{s}xxxxxxxx  ({} available)", app.pool.count_by_segment(s)))
                .collect();
            let Some(seg_idx) = input::select("Segments", &segment_items)? else {
                continue 'category;
            };
            let segment = &segments[seg_idx];

            loop {
                let mut shortlist = app.pool.sample_by_segment(segment, limits.sample_size);
                if shortlist.is_empty() {
                    theme::error("No numbers left in that segment.");
                    continue 'segment;
                }
                sort_lexicographic(&mut shortlist);

                match shortlist_pick(segment, &shortlist)? {
                    Some(ShortlistAction::Take(number)) => return Ok(Some(number)),
                    Some(ShortlistAction::Abort) => return Ok(None),
                    Some(ShortlistAction::BackToSegments) => continue 'segment,
                    Some(ShortlistAction::BackToCategories) => continue 'category,
                    // None: draw a fresh sample and show a new shortlist
                    None => {}
                }
            }
        }
    }
}

enum ShortlistAction {
    Take(String),
    Abort,
    BackToSegments,
    BackToCategories,
}

/// Show a sampled shortlist; None means "refresh and sample again"
fn shortlist_pick(segment: &str, shortlist: &[String]) -> Result<Option<ShortlistAction>> {
    theme::clear_screen()?;
    theme::print_title(&format!("Available in {segment}"));
    for (idx, number) in shortlist.iter().enumerate() {
        theme::line(&format!("{}. {number}", idx + 1));
    }
    println!();
    theme::warn("Pick 1-9, r resamples, b back to segments, c back to categories, Esc aborts");
    theme::flush();

    loop {
        match input::read_key()? {
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let idx = (c as usize - '0' as usize) - 1;
                if idx < shortlist.len() {
                    return Ok(Some(ShortlistAction::Take(shortlist[idx].clone())));
                }
            }
            KeyCode::Char('r' | 'R') => return Ok(None),
            KeyCode::Char('b' | 'B') => return Ok(Some(ShortlistAction::BackToSegments)),
            KeyCode::Char('c' | 'C') => return Ok(Some(ShortlistAction::BackToCategories)),
            KeyCode::Esc => return Ok(Some(ShortlistAction::Abort)),
            _ => {}
        }
    }
}
