// ABOUTME: Interactive screens for subscriber CRUD
//
// All user messaging lives here; the store and pool only report typed
// results. Gender, age, and province are derived from the id card instead of
// being asked for.

use super::{input, theme};
use crate::app::App;
use crate::subscriber::SortOrder;
use crate::validate::id_card;
use anyhow::Result;

/// Add a new subscriber, deriving gender/age from the id card
pub fn add(app: &mut App) -> Result<()> {
    theme::print_title("Add Subscriber");

    let id_card_value = input::read_line("Id card (18 digits): ")?;
    if !id_card::is_valid(&id_card_value) {
        theme::error("That id card is not valid.");
        input::pause()?;
        return Ok(());
    }
    if !app.subscribers.is_id_card_unique(&id_card_value) {
        theme::error("A subscriber with that id card already exists.");
        input::pause()?;
        return Ok(());
    }

    let gender = id_card::gender(&id_card_value).map_or("Unknown", id_card::Gender::label);
    let age = id_card::age(&id_card_value).unwrap_or(0);
    theme::success(&format!("Detected gender: {gender}"));
    theme::success(&format!("Calculated age: {age}"));
    if let Some(province) = id_card::province(&id_card_value) {
        theme::success(&format!("Issuing province: {province}"));
    }

    let name = input::read_line("Name: ")?;
    if name.is_empty() {
        theme::error("Name must not be empty.");
        input::pause()?;
        return Ok(());
    }
    let job = input::read_line("Occupation: ")?;
    let address = input::read_line("Address: ")?;

    let record = crate::subscriber::Subscriber {
        name,
        gender: gender.to_string(),
        age,
        id_card: id_card_value,
        job,
        address,
    };
    match app.subscribers.add(record) {
        Ok(id) => theme::success(&format!("Subscriber added with id {id}.")),
        Err(err) => theme::error(&err.to_string()),
    }
    input::pause()?;
    Ok(())
}

/// Look up a subscriber by id card, phone number, or name
pub fn find(app: &mut App) -> Result<()> {
    let modes = [
        "By id card".to_string(),
        "By phone number".to_string(),
        "By name".to_string(),
    ];
    let Some(mode) = input::select("Find Subscriber", &modes)? else {
        return Ok(());
    };

    theme::print_title("Find Subscriber");
    let found = match mode {
        0 => {
            let id_card_value = input::read_line("Id card: ")?;
            app.subscribers.find_by_id_card(&id_card_value)
        }
        1 => {
            let number = input::read_line("Phone number: ")?;
            app.pool
                .find(&number)
                .and_then(|idx| app.pool.get(idx))
                .and_then(|entry| entry.owner)
        }
        _ => {
            let name = input::read_line("Name: ")?;
            let matches = app.subscribers.find_by_name(&name);
            match matches.len() {
                0 => None,
                1 => Some(matches[0]),
                _ => {
                    // Several subscribers share the name; disambiguate
                    let items: Vec<String> = matches
                        .iter()
                        .filter_map(|&id| app.subscribers.get(id))
                        .map(|s| format!("{} (id card {})", s.name, s.id_card))
                        .collect();
                    input::select("Matching Subscribers", &items)?.map(|idx| matches[idx])
                }
            }
        }
    };

    match found {
        Some(id) => show_details(app, id),
        None => theme::error("No matching subscriber."),
    }
    input::pause()?;
    Ok(())
}

/// Modify one field of an existing subscriber
pub fn modify(app: &mut App) -> Result<()> {
    theme::print_title("Modify Subscriber");
    let id_card_value = input::read_line("Id card of the subscriber: ")?;
    let Some(id) = app.subscribers.find_by_id_card(&id_card_value) else {
        theme::error("No matching subscriber.");
        input::pause()?;
        return Ok(());
    };
    show_details(app, id);

    let fields = [
        "Name".to_string(),
        "Occupation".to_string(),
        "Address".to_string(),
    ];
    let Some(field) = input::select("Field to Modify", &fields)? else {
        return Ok(());
    };

    theme::print_title("Modify Subscriber");
    let value = input::read_line("New value: ")?;
    if value.is_empty() {
        theme::error("Value must not be empty.");
        input::pause()?;
        return Ok(());
    }

    let Some(current) = app.subscribers.get(id) else {
        theme::error("No matching subscriber.");
        input::pause()?;
        return Ok(());
    };
    let mut updated = current.clone();
    match field {
        0 => updated.name = value,
        1 => updated.job = value,
        _ => updated.address = value,
    }
    match app.subscribers.update(id, updated) {
        Ok(()) => theme::success("Subscriber updated."),
        Err(err) => theme::error(&err.to_string()),
    }
    input::pause()?;
    Ok(())
}

/// Delete a subscriber, releasing their numbers first
pub fn delete(app: &mut App) -> Result<()> {
    theme::print_title("Delete Subscriber");
    let id_card_value = input::read_line("Id card of the subscriber: ")?;
    let Some(id) = app.subscribers.find_by_id_card(&id_card_value) else {
        theme::error("No matching subscriber.");
        input::pause()?;
        return Ok(());
    };
    show_details(app, id);

    let held = app.pool.count_for(id);
    if held > 0 {
        theme::warn(&format!(
            "This subscriber still holds {held} number(s); deleting releases them."
        ));
    }
    if !input::confirm("Delete this subscriber?")? {
        theme::line("Nothing deleted.");
        input::pause()?;
        return Ok(());
    }

    // Numbers must be released before the record goes away
    let released = app.pool.unbind_all(id);
    match app.subscribers.remove(id) {
        Ok(removed) => theme::success(&format!(
            "Deleted {} and released {released} number(s).",
            removed.name
        )),
        Err(err) => theme::error(&err.to_string()),
    }
    input::pause()?;
    Ok(())
}

/// List every subscriber with their bound numbers, in a chosen order
pub fn list(app: &mut App) -> Result<()> {
    if app.subscribers.is_empty() {
        theme::print_title("All Subscribers");
        theme::line("No subscribers yet.");
        input::pause()?;
        return Ok(());
    }

    let orders = [
        "Registration order".to_string(),
        "By name".to_string(),
        "By age, youngest first".to_string(),
        "By age, oldest first".to_string(),
        "By id card".to_string(),
    ];
    let Some(choice) = input::select("List Subscribers", &orders)? else {
        return Ok(());
    };
    let ids: Vec<i32> = match choice {
        1 => app.subscribers.sorted_ids(SortOrder::Name),
        2 => app.subscribers.sorted_ids(SortOrder::AgeAscending),
        3 => app.subscribers.sorted_ids(SortOrder::AgeDescending),
        4 => app.subscribers.sorted_ids(SortOrder::IdCard),
        _ => app.subscribers.iter().map(|(id, _)| id).collect(),
    };

    theme::print_title("All Subscribers");
    theme::line(&format!("{} subscriber(s):", ids.len()));
    println!();
    for id in ids {
        show_details(app, id);
        println!();
    }
    input::pause()?;
    Ok(())
}

/// Detail block for one subscriber, including bound numbers
fn show_details(app: &App, id: i32) {
    let Some(subscriber) = app.subscribers.get(id) else {
        return;
    };
    theme::field("Name", &subscriber.name);
    theme::field("Gender", &subscriber.gender);
    theme::field("Age", &subscriber.age.to_string());
    theme::field("Id card", &subscriber.id_card);
    if let Some(province) = id_card::province(&subscriber.id_card) {
        theme::field("Province", province);
    }
    theme::field("Occupation", &subscriber.job);
    theme::field("Address", &subscriber.address);

    let numbers = app.pool.list_for(id);
    let value = if numbers.is_empty() {
        "none".to_string()
    } else {
        numbers.join("  ")
    };
    theme::field("Numbers", &value);
}
