//! Snapshot export — write the colony state as JSON for a renderer.

use crate::colony::{Colony, ColonySnapshot};
use myrmex_core::error::Result;
use std::path::Path;

/// Which parts of the colony to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// Include both trail grids (large: two floats per cell).
    pub include_trails: bool,
    /// Indent the JSON.
    pub pretty: bool,
}

/// Save a snapshot of the colony to a JSON file.
pub fn save_snapshot(colony: &Colony, path: &Path) -> Result<()> {
    save_snapshot_with(colony, path, ExportOptions::default())
}

/// Save a snapshot of the colony with explicit options.
pub fn save_snapshot_with(colony: &Colony, path: &Path, options: ExportOptions) -> Result<()> {
    let snapshot = if options.include_trails {
        colony.snapshot_with_trails()
    } else {
        colony.snapshot()
    };
    let json = if options.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), tick = snapshot.tick, "snapshot saved");
    Ok(())
}

/// Load a snapshot previously written by [`save_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<ColonySnapshot> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use myrmex_core::agent::Agent;
    use myrmex_core::config::SimulationConfig;
    use myrmex_core::types::{Channel, Position};

    fn busy_colony() -> Colony {
        let config = SimulationConfig {
            seed: Some(21),
            ..SimulationConfig::default()
        };
        let mut colony = Colony::from_config(config).unwrap();
        colony.place_food(Position::new(80.0, 47.0), 2).unwrap();
        colony.place_obstacle(Position::new(60.0, 30.0), 3.0).unwrap();
        colony.spawn_forager();
        colony.spawn_forager();
        colony.run(10);
        colony
    }

    #[test]
    fn snapshot_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("snapshot.json");
        let colony = busy_colony();

        save_snapshot(&colony, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap();

        let stats = colony.stats();
        assert_eq!(loaded.tick, 10);
        assert_eq!(loaded.foragers.len(), 2);
        for (saved, live) in loaded.foragers.iter().zip(colony.agents()) {
            assert_eq!(saved.id, live.id());
            assert_eq!(saved.state, live.state());
            assert!(saved.position.distance_to(&live.position()) < 1e-9);
        }
        assert_eq!(loaded.obstacles.len(), 1);
        assert_eq!(loaded.stats.food_remaining, stats.food_remaining);
        assert!((loaded.stats.search_trail_mass - stats.search_trail_mass).abs() < 1e-9);
        assert!(loaded.trails.is_none());
    }

    #[test]
    fn trails_are_written_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trails.json");
        let colony = busy_colony();
        let options = ExportOptions {
            include_trails: true,
            pretty: true,
        };

        save_snapshot_with(&colony, &path, options).unwrap();
        let trails = load_snapshot(&path).unwrap().trails.unwrap();

        let saved = trails.channel(Channel::Search);
        let live = colony.field().channel(Channel::Search);
        assert_eq!(saved.len(), live.len());
        assert!(saved.iter().zip(live).all(|(a, b)| (a - b).abs() < 1e-12));
        assert!(trails.total_mass(Channel::Search) > 0.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, myrmex_core::error::MyrmexError::Io(_)));
    }
}
