//! Concrete implementation of the Environment trait.
//!
//! Obstacles are a plain list (placement is rare and counts are small).
//! Food lives in a slot registry handing out generational handles, so a
//! forager holding a handle to a removed source resolves it to `None`
//! instead of reaching a newer source that reused the slot.

use myrmex_core::error::PlacementError;
use myrmex_core::food::{FoodSource, Obstacle};
use myrmex_core::substrate::Environment;
use myrmex_core::types::*;

struct FoodSlot {
    generation: u32,
    source: Option<FoodSource>,
}

/// Generational storage for food sources.
#[derive(Default)]
pub struct FoodRegistry {
    slots: Vec<FoodSlot>,
}

impl FoodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a source, reusing the first free slot.
    pub fn insert(&mut self, source: FoodSource) -> FoodHandle {
        if let Some(index) = self.slots.iter().position(|s| s.source.is_none()) {
            let slot = &mut self.slots[index];
            slot.generation = slot.generation.wrapping_add(1);
            slot.source = Some(source);
            return FoodHandle {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(FoodSlot {
            generation: 0,
            source: Some(source),
        });
        FoodHandle {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    pub fn get(&self, handle: FoodHandle) -> Option<&FoodSource> {
        self.slots
            .get(handle.index)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.source.as_ref())
    }

    pub fn remove(&mut self, handle: FoodHandle) -> Option<FoodSource> {
        self.slots
            .get_mut(handle.index)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.source.take())
    }

    /// Remove every source with no units left, returning what was removed.
    pub fn remove_depleted(&mut self) -> Vec<(FoodHandle, FoodSource)> {
        let mut removed = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.source.as_ref().map_or(false, |s| s.is_depleted()) {
                if let Some(source) = slot.source.take() {
                    removed.push((
                        FoodHandle {
                            index,
                            generation: slot.generation,
                        },
                        source,
                    ));
                }
            }
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodHandle, &FoodSource)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.source.as_ref().map(|source| {
                (
                    FoodHandle {
                        index,
                        generation: slot.generation,
                    },
                    source,
                )
            })
        })
    }

    /// Number of sources currently stored.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Units left across all sources.
    pub fn total_units(&self) -> u64 {
        self.iter().map(|(_, s)| s.remaining_units() as u64).sum()
    }
}

/// Obstacles and food on a bounded field.
pub struct Terrain {
    bounds: Bounds,
    obstacles: Vec<Obstacle>,
    food: FoodRegistry,
}

impl Terrain {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            food: FoodRegistry::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn check_placement(&self, position: &Position) -> Result<(), PlacementError> {
        if self.bounds.contains(position) {
            Ok(())
        } else {
            Err(PlacementError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.bounds.width,
                height: self.bounds.height,
            })
        }
    }

    /// Place a `size × size` food source anchored at `position` with the
    /// default unit count.
    pub fn place_food(&mut self, position: Position, size: u32) -> Result<FoodHandle, PlacementError> {
        if size == 0 {
            return Err(PlacementError::EmptySize);
        }
        let source = FoodSource::new(position, size).ok_or(PlacementError::TooLarge { size })?;
        self.add_food(source)
    }

    /// Place a prepared food source.
    pub fn add_food(&mut self, source: FoodSource) -> Result<FoodHandle, PlacementError> {
        self.check_placement(&source.position())?;
        Ok(self.food.insert(source))
    }

    /// Place a square obstacle with its corner at `origin`.
    pub fn place_obstacle(&mut self, origin: Position, size: f64) -> Result<(), PlacementError> {
        if !(size > 0.0) {
            return Err(PlacementError::EmptySize);
        }
        self.check_placement(&origin)?;
        self.obstacles.push(Obstacle::new(origin, size));
        Ok(())
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn food_registry(&self) -> &FoodRegistry {
        &self.food
    }

    pub fn food_registry_mut(&mut self) -> &mut FoodRegistry {
        &mut self.food
    }
}

impl Environment for Terrain {
    fn is_solid(&self, point: &Position) -> bool {
        self.obstacles.iter().any(|o| o.contains_point(point))
    }

    fn food_near(&self, point: &Position, radius: f64) -> Vec<FoodHandle> {
        self.food
            .iter()
            .filter(|(_, source)| source.position().distance_to(point) < radius)
            .map(|(handle, _)| handle)
            .collect()
    }

    fn food(&self, handle: FoodHandle) -> Option<&FoodSource> {
        self.food.get(handle)
    }
}
