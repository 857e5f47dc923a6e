//! # Myrmex Agents
//!
//! Agent implementations and spawn policies for Myrmex colonies.
//!
//! - **Forager** — explores, follows return trails, carries food home
//! - **NestSpawnPolicy** — hatches waves of foragers at the nest

pub mod forager;
pub mod spawn;
pub mod prelude;
