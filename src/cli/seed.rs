// ABOUTME: `numdesk seed` - generate numbers for a prefix without the menu

use crate::app::App;
use anyhow::Result;
use std::path::PathBuf;

pub fn execute(data_dir: PathBuf, prefix: &str, count: usize) -> Result<()> {
    let mut app = App::init(data_dir)?;
    let before = app.pool.len();

    let added = app.pool.generate_segment(prefix, count)?;
    app.save()?;

    tracing::info!(prefix, added, "segment seeded");
    println!(
        "Added {added} number(s) for prefix {prefix} ({} -> {} total).",
        before,
        app.pool.len()
    );
    Ok(())
}
