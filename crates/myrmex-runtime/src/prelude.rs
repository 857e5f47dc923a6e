//! Myrmex Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use myrmex_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{
    Colony, ColonyEvent, ColonySnapshot, ColonyStats, FoodSnapshot, ForagerSnapshot,
};

// Re-export the field and scenery
pub use crate::terrain::{FoodRegistry, Terrain};
pub use crate::trail_field::TrailField;

// Re-export export helpers
pub use crate::export::{load_snapshot, save_snapshot, save_snapshot_with, ExportOptions};

// Re-export from agents
pub use myrmex_agents::prelude::*;
