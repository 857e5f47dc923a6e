//! Myrmex Prelude — everything needed to build and run a colony.
//!
//! ```rust
//! use myrmex::prelude::*;
//! ```

pub use myrmex_runtime::prelude::*;
