// ABOUTME: `numdesk stats` - pool and subscriber counts at a glance

use crate::app::App;
use crate::pool::PhoneState;
use anyhow::Result;
use std::path::PathBuf;

pub fn execute(data_dir: PathBuf) -> Result<()> {
    let app = App::init(data_dir)?;

    let mut free = 0usize;
    let mut assigned = 0usize;
    let mut inactive = 0usize;
    for entry in app.pool.entries() {
        match entry.state {
            PhoneState::Free => free += 1,
            PhoneState::Assigned => assigned += 1,
            PhoneState::Inactive => inactive += 1,
        }
    }

    println!("Data directory: {}", app.data_dir().display());
    println!("Numbers:        {} total", app.pool.len());
    println!("  free:         {free}");
    println!("  assigned:     {assigned}");
    println!("  inactive:     {inactive}");
    println!("Subscribers:    {}", app.subscribers.len());

    for category in app.pool.categories(usize::MAX) {
        println!(
            "  category {category}: {} free",
            app.pool.count_by_category(&category)
        );
    }
    Ok(())
}
