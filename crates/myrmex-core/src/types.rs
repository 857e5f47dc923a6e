//! Shared types used across all Myrmex crates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use uuid::Uuid;

/// Unique identifier for a forager in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a deterministic ID (for reproducible runs and tests).
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(0x6d79_726d_6578_0000, seed))
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A point or vector in the continuous 2-D field.
///
/// The same type is used for positions and headings; the arithmetic
/// operators treat it as a plain vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle of this vector in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalized(&self) -> Option<Position> {
        let len = self.length();
        if len < f64::EPSILON {
            None
        } else {
            Some(Position::new(self.x / len, self.y / len))
        }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Grid cell containing this point (floor of each coordinate).
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, rhs: f64) -> Position {
        Position::new(self.x * rhs, self.y * rhs)
    }
}

/// Width and height of the simulated field, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Whether a point lies in `[0, width) × [0, height)`.
    pub fn contains(&self, p: &Position) -> bool {
        p.x >= 0.0 && p.x < self.width as f64 && p.y >= 0.0 && p.y < self.height as f64
    }

    /// Center of the field.
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as f64, (self.height / 2) as f64)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// The two trail signals a forager can lay down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Laid while exploring away from the nest.
    Search,
    /// Laid while carrying food home; explorers follow it.
    Return,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Search, Channel::Return];

    pub fn index(self) -> usize {
        match self {
            Channel::Search => 0,
            Channel::Return => 1,
        }
    }
}

/// Behavioral state of a forager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForagerState {
    /// Wandering and following return trails in search of food.
    Exploring,
    /// Carrying a unit of food straight back to the nest.
    Returning,
}

impl ForagerState {
    /// Channel a forager in this state deposits into.
    pub fn deposit_channel(self) -> Channel {
        match self {
            ForagerState::Exploring => Channel::Search,
            ForagerState::Returning => Channel::Return,
        }
    }
}

/// Non-owning handle to a food source in the colony's registry.
///
/// The generation guards against a slot being reused after the
/// source it pointed at was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodHandle {
    pub index: usize,
    pub generation: u32,
}

/// A signal deposit produced by a forager step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub position: Position,
    pub channel: Channel,
    pub amount: f64,
}

/// The current tick of the simulation.
pub type Tick = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_rejects_zero_vector() {
        assert!(Position::ZERO.normalized().is_none());
        let n = Position::new(3.0, 4.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cell_floors_coordinates() {
        assert_eq!(Position::new(3.9, 0.1).cell(), (3, 0));
        assert_eq!(Position::new(-0.5, 2.0).cell(), (-1, 2));
    }

    #[test]
    fn bounds_are_half_open() {
        let b = Bounds::new(10, 5);
        assert!(b.contains(&Position::new(0.0, 0.0)));
        assert!(b.contains(&Position::new(9.999, 4.999)));
        assert!(!b.contains(&Position::new(10.0, 1.0)));
        assert!(!b.contains(&Position::new(1.0, -0.001)));
    }

    #[test]
    fn deterministic_ids_are_stable() {
        assert_eq!(AgentId::from_seed(7), AgentId::from_seed(7));
        assert_ne!(AgentId::from_seed(7), AgentId::from_seed(8));
    }
}
