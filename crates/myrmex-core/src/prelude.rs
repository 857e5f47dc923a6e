//! Myrmex Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use myrmex_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    AgentId, Position, Bounds,
    Channel, ForagerState,
    FoodHandle, Deposit,
    Tick,
};

// Re-export scenery
pub use crate::food::{FoodSource, Obstacle};

// Re-export the Agent trait and its step report
pub use crate::agent::{Agent, AgentEvent, StepOutcome};

// Re-export the substrate traits
pub use crate::substrate::{Environment, TrailSubstrate};

// Re-export configuration
pub use crate::config::{ColonyConfig, FieldConfig, ForagerParams, SimulationConfig};

// Re-export error types
pub use crate::error::{ConfigError, MyrmexError, PlacementError, Result};
