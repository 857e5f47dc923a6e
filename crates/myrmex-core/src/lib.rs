//! # Myrmex Core
//!
//! Core traits and types for Myrmex foraging simulations.
//!
//! Foragers coordinate purely through their environment (stigmergy):
//!
//! - **Trail substrate** — a two-channel chemical field foragers sense and mark
//! - **Environment** — obstacles and food sources foragers query
//! - **Agent** — the per-forager step contract
//! - **Config** — every tunable, bundled and validated
//!
//! ## Quick Start
//!
//! ```rust
//! use myrmex_core::prelude::*;
//!
//! // Create a position
//! let pos = Position::new(0.0, 0.0);
//!
//! // Create a deterministic agent ID (for testing)
//! let id = AgentId::from_seed(42);
//!
//! // Validate the default configuration
//! assert!(SimulationConfig::default().validate().is_ok());
//! ```

pub mod types;
pub mod geometry;
pub mod food;
pub mod agent;
pub mod substrate;
pub mod config;
pub mod error;
pub mod prelude;
