// ABOUTME: Process-wide application state - pool, subscriber store, and data files
//
// One `App` value owns everything; there are no globals. Startup loads both
// data files, falling back to seeding the configured default segments when
// the pool file is absent. Shutdown (and the explicit save action) writes
// both files back.

use crate::config::AppConfig;
use crate::pool::{codec as pool_codec, ResourcePool};
use crate::subscriber::{codec as subscriber_codec, SubscriberStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the tool operates on for one session
#[derive(Debug)]
pub struct App {
    pub config: AppConfig,
    pub pool: ResourcePool,
    pub subscribers: SubscriberStore,
    data_dir: PathBuf,
}

impl App {
    /// Initialize state from the data directory: load the config and both
    /// data files, seeding the pool with the configured default segments
    /// when no pool file exists yet.
    pub fn init(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;
        let config = AppConfig::load(&data_dir)?;

        let mut pool = ResourcePool::new();
        let pool_path = data_dir.join(&config.pool_file);
        match pool_codec::load(&mut pool, &pool_path) {
            Ok(()) => {}
            Err(err) => {
                tracing::warn!(%err, path = %pool_path.display(), "pool load failed, seeding defaults");
                for seed in &config.seed_segments {
                    if let Err(err) = pool.generate_segment(&seed.prefix, seed.count) {
                        tracing::warn!(prefix = %seed.prefix, %err, "seed segment skipped");
                    }
                }
                tracing::info!(
                    segments = config.seed_segments.len(),
                    count = pool.len(),
                    "pool seeded"
                );
            }
        }

        let mut subscribers = SubscriberStore::new();
        let subscriber_path = data_dir.join(&config.subscriber_file);
        if let Err(err) = subscriber_codec::load(&mut subscribers, &subscriber_path) {
            tracing::warn!(%err, path = %subscriber_path.display(), "subscriber load failed, starting empty");
        }

        Ok(Self {
            config,
            pool,
            subscribers,
            data_dir,
        })
    }

    /// Write both data files. A failure in either file is reported; the
    /// other file is still attempted.
    pub fn save(&self) -> Result<()> {
        let pool_path = self.pool_path();
        let pool_result = pool_codec::save(&self.pool, &pool_path)
            .with_context(|| format!("failed to save pool to {}", pool_path.display()));

        let subscriber_path = self.subscriber_path();
        let subscriber_result = subscriber_codec::save(&self.subscribers, &subscriber_path)
            .with_context(|| format!("failed to save subscribers to {}", subscriber_path.display()));

        pool_result.and(subscriber_result)
    }

    /// Directory holding the data files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the pool data file
    pub fn pool_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.pool_file)
    }

    /// Full path of the subscriber data file
    pub fn subscriber_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.subscriber_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_seeds_defaults_when_no_data() {
        let dir = tempdir().unwrap();
        let app = App::init(dir.path().to_path_buf()).unwrap();

        // Three default segments at 50 numbers each
        assert_eq!(app.pool.len(), 150);
        assert!(app.subscribers.is_empty());
    }

    #[test]
    fn test_save_then_init_round_trip() {
        let dir = tempdir().unwrap();
        let mut app = App::init(dir.path().to_path_buf()).unwrap();

        let id = app
            .subscribers
            .add(crate::subscriber::Subscriber {
                name: "An".to_string(),
                gender: "Male".to_string(),
                age: 30,
                id_card: "110101199003070011".to_string(),
                job: "Clerk".to_string(),
                address: "1 High Street".to_string(),
            })
            .unwrap();
        app.pool.bind(id, "13800000000").unwrap();
        app.save().unwrap();

        let reloaded = App::init(dir.path().to_path_buf()).unwrap();
        assert_eq!(reloaded.pool.len(), app.pool.len());
        assert_eq!(reloaded.subscribers.len(), 1);
        assert_eq!(reloaded.pool.list_for(id), vec!["13800000000"]);
    }
}
