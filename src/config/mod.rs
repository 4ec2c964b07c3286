// ABOUTME: Application configuration - data location, seed segments, browse limits
//
// Loaded from `config.toml` in the data directory; every field has a default
// so a missing or partial file still yields a working setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// File name of the phone-pool data file inside the data directory
    #[serde(default = "default_pool_file")]
    pub pool_file: String,

    /// File name of the subscriber data file inside the data directory
    #[serde(default = "default_subscriber_file")]
    pub subscriber_file: String,

    /// Segments generated when no pool data file exists yet
    #[serde(default = "default_seed_segments")]
    pub seed_segments: Vec<SeedSegment>,

    /// Limits applied to the interactive browse views
    #[serde(default)]
    pub browse: BrowseLimits,
}

/// One segment prefix to seed, with how many numbers to generate from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSegment {
    /// 3-7 digit generation prefix
    pub prefix: String,

    /// Numbers to generate from this prefix
    #[serde(default = "default_seed_count")]
    pub count: usize,
}

/// Caps for the category/segment/sample browse screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseLimits {
    /// Most categories shown at once
    #[serde(default = "default_max_categories")]
    pub max_categories: usize,

    /// Most segments shown at once
    #[serde(default = "default_max_segments")]
    pub max_segments: usize,

    /// Numbers in a sampled shortlist (keep below 10 for digit-key selection)
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pool_file: default_pool_file(),
            subscriber_file: default_subscriber_file(),
            seed_segments: default_seed_segments(),
            browse: BrowseLimits::default(),
        }
    }
}

impl Default for BrowseLimits {
    fn default() -> Self {
        Self {
            max_categories: default_max_categories(),
            max_segments: default_max_segments(),
            sample_size: default_sample_size(),
        }
    }
}

impl AppConfig {
    /// Load from `config.toml` under `data_dir`, falling back to defaults
    /// when the file does not exist
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Write the current configuration to `config.toml` under `data_dir`
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join("config.toml");
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write config at {}", path.display()))?;
        Ok(())
    }
}

/// Default data directory: `<platform data dir>/numdesk`, or `./.numdesk`
/// when the platform directory cannot be resolved
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".numdesk"), |d| d.join("numdesk"))
}

fn default_pool_file() -> String {
    "phoneData.dat".to_string()
}

fn default_subscriber_file() -> String {
    "userData.dat".to_string()
}

fn default_seed_segments() -> Vec<SeedSegment> {
    ["138", "139", "150"]
        .into_iter()
        .map(|prefix| SeedSegment {
            prefix: prefix.to_string(),
            count: default_seed_count(),
        })
        .collect()
}

fn default_seed_count() -> usize {
    50
}

fn default_max_categories() -> usize {
    20
}

fn default_max_segments() -> usize {
    20
}

fn default_sample_size() -> usize {
    9
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config.pool_file, "phoneData.dat");
        assert_eq!(config.subscriber_file, "userData.dat");
        assert_eq!(config.seed_segments.len(), 3);
        assert_eq!(config.browse.sample_size, 9);
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "pool_file = \"pool.bin\"\n\n[browse]\nsample_size = 5\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.pool_file, "pool.bin");
        assert_eq!(config.subscriber_file, "userData.dat");
        assert_eq!(config.browse.sample_size, 5);
        assert_eq!(config.browse.max_segments, 20);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let mut config = AppConfig::default();
        config.seed_segments.push(SeedSegment {
            prefix: "177".to_string(),
            count: 10,
        });
        config.save(dir.path()).unwrap();

        let loaded = AppConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.seed_segments.len(), 4);
        assert_eq!(loaded.seed_segments[3].prefix, "177");
        assert_eq!(loaded.seed_segments[3].count, 10);
    }
}
