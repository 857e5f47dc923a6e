//! Food sources and obstacles — the passive scenery foragers interact with.

use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Units of food per unit of area for a newly placed source.
pub const UNITS_PER_AREA: u32 = 5;

/// A pile of food that foragers carry home one unit at a time.
///
/// `claim_unit` is safe to call from many threads at once: at most one
/// caller succeeds per remaining unit.
#[derive(Debug)]
pub struct FoodSource {
    position: Position,
    size: u32,
    initial_units: u32,
    remaining: AtomicU32,
}

impl FoodSource {
    /// A source of `size × size` cells holding `size² × 5` units.
    ///
    /// `None` if that unit count does not fit in a `u32`.
    pub fn new(position: Position, size: u32) -> Option<Self> {
        Self::units_for_size(size).map(|units| Self::with_units(position, size, units))
    }

    /// Default unit count for a source of edge length `size`, if representable.
    pub fn units_for_size(size: u32) -> Option<u32> {
        size.checked_mul(size)
            .and_then(|area| area.checked_mul(UNITS_PER_AREA))
    }

    /// A source with an explicit unit count.
    pub fn with_units(position: Position, size: u32, units: u32) -> Self {
        Self {
            position,
            size,
            initial_units: units,
            remaining: AtomicU32::new(units),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn initial_units(&self) -> u32 {
        self.initial_units
    }

    pub fn remaining_units(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    /// Take one unit. Returns false and leaves the source untouched if empty.
    pub fn claim_unit(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |units| units.checked_sub(1))
            .is_ok()
    }

    pub fn is_depleted(&self) -> bool {
        self.remaining_units() == 0
    }
}

/// An impassable axis-aligned square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub origin: Position,
    pub size: f64,
}

impl Obstacle {
    pub fn new(origin: Position, size: f64) -> Self {
        Self { origin, size }
    }

    /// Whether `p` lies in `[x, x+size) × [y, y+size)`.
    pub fn contains_point(&self, p: &Position) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.size
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.size
    }
}
