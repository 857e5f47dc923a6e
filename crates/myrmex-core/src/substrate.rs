//! Substrate — the shared environment all foragers operate within.
//!
//! Foragers never talk to each other. They read the trail field and the
//! scenery, and write deposits that the colony folds back into the field.

use crate::food::FoodSource;
use crate::types::*;

/// The chemical trail field foragers sense and mark.
///
/// Reads during a tick must only ever see the field as it stood at the
/// end of the previous tick; the colony guarantees this by borrowing the
/// field immutably while foragers step and applying deposits afterwards.
pub trait TrailSubstrate: Sync {
    /// Signal strength of `channel` at the cell containing `position`.
    ///
    /// Out-of-bounds positions read as `0.0`.
    fn sample(&self, position: &Position, channel: Channel) -> f64;

    /// Add `amount` of `channel` to the cell containing `position`.
    ///
    /// Out-of-bounds positions are ignored.
    fn deposit(&mut self, position: &Position, channel: Channel, amount: f64);

    /// Evaporate and diffuse every channel once.
    fn update(&mut self);

    /// Field dimensions.
    fn bounds(&self) -> Bounds;
}

/// Scenery lookups: solidity and food.
pub trait Environment: Sync {
    /// Whether `point` lies inside an obstacle.
    fn is_solid(&self, point: &Position) -> bool;

    /// Handles of food sources within `radius` of `point` (strictly closer).
    fn food_near(&self, point: &Position, radius: f64) -> Vec<FoodHandle>;

    /// Resolve a handle. `None` once the source has been removed.
    fn food(&self, handle: FoodHandle) -> Option<&FoodSource>;

    /// Resolve a handle to a source that still holds food.
    fn live_food(&self, handle: FoodHandle) -> Option<&FoodSource> {
        self.food(handle).filter(|f| !f.is_depleted())
    }
}
