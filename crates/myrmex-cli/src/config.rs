//! Configuration management for Myrmex CLI.

use anyhow::{Context, Result};
use myrmex::prelude::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "myrmex.toml";

/// Myrmex project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Defaults for `myrmex run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    /// Food sources placed before the first tick, as `[x, y]` pairs.
    #[serde(default)]
    pub food: Vec<[f64; 2]>,
    /// Obstacles placed before the first tick, as `[x, y]` corners.
    #[serde(default)]
    pub obstacles: Vec<[f64; 2]>,
}

fn default_ticks() -> u64 { 1000 }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            food: Vec::new(),
            obstacles: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from myrmex.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find myrmex.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_survives_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.run.food.push([10.0, 20.0]);

        config.save(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.simulation.field, config.simulation.field);
        assert_eq!(loaded.simulation.colony.max_population, 100);
        assert_eq!(loaded.run.ticks, 1000);
        assert_eq!(loaded.run.food, vec![[10.0, 20.0]]);
        assert!(loaded.simulation.seed.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[simulation]\nseed = 9\n\n[simulation.field]\nwidth = 60\n",
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.simulation.seed, Some(9));
        assert_eq!(loaded.simulation.field.width, 60);
        assert_eq!(loaded.simulation.field.height, 94);
        assert_eq!(loaded.simulation.forager.stuck_threshold, 10);
        assert_eq!(loaded.run.ticks, 1000);
    }
}
