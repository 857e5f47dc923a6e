//! Simulation configuration.
//!
//! Every tunable lives here and is handed to constructors explicitly;
//! nothing is read from process-wide state. The defaults reproduce the
//! classic 148×94 arena with a nest in the middle.

use crate::error::{MyrmexError, Result};
use crate::food::FoodSource;
use crate::types::{Bounds, Position};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_6, PI};

/// Trail field dimensions and dynamics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    /// Multiplier applied to every cell each tick, in `(0, 1)`.
    pub evaporation_rate: f64,
    /// Share of a cell's signal blended with its neighbors each tick, in `[0, 1]`.
    pub diffusion_rate: f64,
}

impl FieldConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 148,
            height: 94,
            evaporation_rate: 0.995,
            diffusion_rate: 0.1,
        }
    }
}

/// Steering parameters shared by every forager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForagerParams {
    /// Distance travelled per tick; also the heading magnitude.
    pub speed: f64,
    /// How far ahead the three trail sensors sit.
    pub sensor_distance: f64,
    /// Angle between the center sensor and each side sensor (radians).
    pub sensor_angle: f64,
    /// Largest heading change per tick (radians).
    pub max_turn_angle: f64,
    /// Chance per tick that an explorer picks a random direction.
    pub random_turn_chance: f64,
    /// Rejected moves tolerated before a forced random heading.
    pub stuck_threshold: u32,
    /// Distance from the nest at which food is dropped.
    pub arrival_radius: f64,
    /// Distance at which an explorer notices food.
    pub food_sense_radius: f64,
    /// Signal laid per tick.
    pub deposit_amount: f64,
}

impl Default for ForagerParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            sensor_distance: 3.0,
            sensor_angle: FRAC_PI_6,
            max_turn_angle: FRAC_PI_4,
            random_turn_chance: 0.3,
            stuck_threshold: 10,
            arrival_radius: 1.0,
            food_sense_radius: 3.0,
            deposit_amount: 1.0,
        }
    }
}

/// Colony bookkeeping: nest, spawning, scenery defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Nest position; `None` places it at the field center.
    pub nest: Option<Position>,
    /// Ticks between spawn waves.
    pub spawn_interval: u64,
    /// Foragers per spawn wave.
    pub ants_per_spawn: usize,
    /// Population cap.
    pub max_population: usize,
    /// Edge length of newly placed food sources.
    pub food_size: u32,
    /// Edge length of newly placed obstacles.
    pub obstacle_size: f64,
    /// Step foragers on the rayon pool. Food claims then race, so runs are
    /// no longer bit-for-bit reproducible.
    pub parallel: bool,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            nest: None,
            spawn_interval: 70,
            ants_per_spawn: 10,
            max_population: 100,
            food_size: 3,
            obstacle_size: 3.0,
            parallel: false,
        }
    }
}

/// Complete configuration for one simulation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub field: FieldConfig,
    pub forager: ForagerParams,
    pub colony: ColonyConfig,
    /// Master RNG seed; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Resolved nest position.
    pub fn nest(&self) -> Position {
        self.colony.nest.unwrap_or_else(|| self.field.bounds().center())
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<()> {
        let f = &self.field;
        if f.width == 0 || f.height == 0 {
            return Err(MyrmexError::invalid_config(
                "field",
                format!("{}x{}", f.width, f.height),
                "field must have at least one cell",
            ));
        }
        open_unit("field.evaporation_rate", f.evaporation_rate)?;
        closed_range("field.diffusion_rate", 0.0, 1.0, f.diffusion_rate)?;

        let a = &self.forager;
        positive("forager.speed", a.speed)?;
        closed_range("forager.sensor_distance", 0.0, f64::MAX, a.sensor_distance)?;
        closed_range("forager.sensor_angle", 0.0, PI, a.sensor_angle)?;
        closed_range("forager.max_turn_angle", 0.0, PI, a.max_turn_angle)?;
        closed_range("forager.random_turn_chance", 0.0, 1.0, a.random_turn_chance)?;
        positive("forager.arrival_radius", a.arrival_radius)?;
        closed_range("forager.food_sense_radius", 0.0, f64::MAX, a.food_sense_radius)?;
        closed_range("forager.deposit_amount", 0.0, f64::MAX, a.deposit_amount)?;

        let nest = self.nest();
        if !f.bounds().contains(&nest) {
            return Err(MyrmexError::invalid_config(
                "colony.nest",
                format!("({}, {})", nest.x, nest.y),
                "nest must lie inside the field",
            ));
        }
        if self.colony.spawn_interval == 0 {
            return Err(MyrmexError::invalid_config(
                "colony.spawn_interval",
                "0",
                "spawn interval must be at least one tick",
            ));
        }
        if self.colony.food_size == 0 {
            return Err(MyrmexError::invalid_config(
                "colony.food_size",
                "0",
                "food sources need a positive size",
            ));
        }
        if FoodSource::units_for_size(self.colony.food_size).is_none() {
            return Err(MyrmexError::invalid_config(
                "colony.food_size",
                self.colony.food_size.to_string(),
                "unit count overflows",
            ));
        }
        positive("colony.obstacle_size", self.colony.obstacle_size)?;
        Ok(())
    }
}

fn open_unit(field: &str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(MyrmexError::out_of_range(field, 0.0, 1.0, value))
    }
}

fn closed_range(field: &str, min: f64, max: f64, value: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(MyrmexError::out_of_range(field, min, max, value))
    }
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MyrmexError::invalid_config(
            field,
            value.to_string(),
            "must be positive",
        ))
    }
}
