//! Myrmex Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use myrmex_agents::prelude::*;
//! ```

// Re-export agent types
pub use crate::forager::Forager;
pub use crate::spawn::{NestSpawnPolicy, NoSpawnPolicy, SpawnPolicy};

// Re-export from core
pub use myrmex_core::prelude::*;
