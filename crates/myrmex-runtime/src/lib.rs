//! # Myrmex Runtime
//!
//! Colony management, the trail field, and terrain.
//!
//! The runtime hosts the simulation: it owns the two-channel trail
//! field and the scenery, hatches and steps foragers, and exports
//! snapshots for rendering.

pub mod trail_field;
pub mod terrain;
pub mod colony;
pub mod export;
pub mod prelude;
