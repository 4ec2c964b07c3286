// ABOUTME: `numdesk list` - dump pool entries, optionally filtered by state

use crate::app::App;
use crate::pool::PhoneState;
use anyhow::{bail, Result};
use std::path::PathBuf;

pub fn execute(data_dir: PathBuf, state: Option<&str>) -> Result<()> {
    let filter = match state {
        Some(raw) => Some(parse_state(raw)?),
        None => None,
    };

    let app = App::init(data_dir)?;
    let mut shown = 0usize;
    for entry in app.pool.entries() {
        if filter.is_some_and(|wanted| entry.state != wanted) {
            continue;
        }
        shown += 1;
        match (entry.owner, &entry.assigned_at) {
            (Some(owner), Some(stamp)) => {
                println!("{}  {}  subscriber {owner}  {stamp}", entry.number, entry.state);
            }
            _ => println!("{}  {}", entry.number, entry.state),
        }
    }
    println!("{shown} number(s).");
    Ok(())
}

fn parse_state(raw: &str) -> Result<PhoneState> {
    match raw.to_ascii_lowercase().as_str() {
        "free" => Ok(PhoneState::Free),
        "assigned" => Ok(PhoneState::Assigned),
        "inactive" => Ok(PhoneState::Inactive),
        other => bail!("unknown state '{other}', expected free, assigned, or inactive"),
    }
}
