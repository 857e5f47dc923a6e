//! # Myrmex
//!
//! Emergent ant foraging through stigmergic trail fields.
//!
//! Foragers leave the nest, wander, and lay a *search* trail. One that
//! finds food turns for home laying a *return* trail, and explorers that
//! smell a return trail steer into it. Nobody plans a route; paths to
//! food form because successful foragers mark them.
//!
//! ## Quick Start
//!
//! ```rust
//! use myrmex::prelude::*;
//!
//! let config = SimulationConfig {
//!     seed: Some(42),
//!     ..SimulationConfig::default()
//! };
//! let mut colony = Colony::from_config(config).unwrap();
//!
//! // Food just east of the nest, a wall to the north
//! colony.place_food(Position::new(90.0, 47.0), 3).unwrap();
//! colony.place_obstacle(Position::new(70.0, 35.0), 6.0).unwrap();
//!
//! // Spawn waves hatch every 70 ticks
//! colony.run(500);
//!
//! let stats = colony.stats();
//! println!(
//!     "{} foragers, {} units delivered",
//!     stats.foragers_alive, stats.food_delivered
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`myrmex_core`] - Shared types, configuration, errors, and the
//!   `Agent` / `TrailSubstrate` / `Environment` traits
//! - [`myrmex_agents`] - The `Forager` and spawn policies
//! - [`myrmex_runtime`] - Trail field, terrain, colony loop, snapshots
//!
//! ## The Trail Field
//!
//! | Channel | Laid by | Read by |
//! |---------|---------|---------|
//! | Search | Exploring foragers | nobody (kept for display) |
//! | Return | Foragers carrying food home | Exploring foragers |
//!
//! Every tick each cell is multiplied by the evaporation rate and then
//! blended with its four neighbors.

pub use myrmex_agents;
pub use myrmex_core;
pub use myrmex_runtime;

pub mod prelude;
