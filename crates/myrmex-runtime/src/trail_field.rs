//! Concrete implementation of the trail substrate.
//!
//! One flat `Vec<f64>` per channel, indexed `y * width + x`.
//!
//! Each `update` evaporates every cell, then diffuses it with its four
//! axis-aligned neighbors:
//!
//! ```text
//! new = old * (1 - d) + (north + south + east + west) * d / 8
//! ```
//!
//! Diffusion reads from the evaporated grid and writes into a scratch
//! buffer, so no cell ever sees a partially updated neighbor.
//!
//! Edges wrap around (the field is a torus). Every cell hands out
//! `d / 2` of its signal and keeps `1 - d`, so one update scales total
//! mass by exactly `evaporation_rate * (1 - d / 2)`.

use myrmex_core::config::FieldConfig;
use myrmex_core::substrate::TrailSubstrate;
use myrmex_core::types::*;
use serde::{Deserialize, Serialize};

/// Two-channel pheromone grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailField {
    width: usize,
    height: usize,
    evaporation_rate: f64,
    diffusion_rate: f64,
    channels: [Vec<f64>; 2],
    #[serde(skip)]
    scratch: Vec<f64>,
}

impl TrailField {
    /// An empty field. Rates are clamped into `[0, 1]`.
    pub fn new(bounds: Bounds, evaporation_rate: f64, diffusion_rate: f64) -> Self {
        let cells = bounds.cell_count();
        Self {
            width: bounds.width,
            height: bounds.height,
            evaporation_rate: evaporation_rate.clamp(0.0, 1.0),
            diffusion_rate: diffusion_rate.clamp(0.0, 1.0),
            channels: [vec![0.0; cells], vec![0.0; cells]],
            scratch: vec![0.0; cells],
        }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.bounds(), config.evaporation_rate, config.diffusion_rate)
    }

    pub fn evaporation_rate(&self) -> f64 {
        self.evaporation_rate
    }

    pub fn diffusion_rate(&self) -> f64 {
        self.diffusion_rate
    }

    fn index_of(&self, position: &Position) -> Option<usize> {
        let (x, y) = position.cell();
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Strength at integer cell `(x, y)`, or `0.0` outside the grid.
    pub fn strength_at(&self, x: usize, y: usize, channel: Channel) -> f64 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.channels[channel.index()][y * self.width + x]
    }

    /// Raw cell values of one channel (row-major, for drawing).
    pub fn channel(&self, channel: Channel) -> &[f64] {
        &self.channels[channel.index()]
    }

    /// Sum over all cells of one channel.
    pub fn total_mass(&self, channel: Channel) -> f64 {
        self.channels[channel.index()].iter().sum()
    }

    /// Strongest cell of one channel.
    pub fn max_strength(&self, channel: Channel) -> f64 {
        self.channels[channel.index()]
            .iter()
            .copied()
            .fold(0.0, f64::max)
    }

    /// Apply a forager's deposit.
    pub fn apply(&mut self, deposit: &Deposit) {
        self.deposit(&deposit.position, deposit.channel, deposit.amount);
    }

    /// Wipe both channels.
    pub fn clear(&mut self) {
        for grid in &mut self.channels {
            grid.iter_mut().for_each(|v| *v = 0.0);
        }
    }

    fn diffuse(&mut self, channel: usize) {
        let (w, h) = (self.width, self.height);
        let keep = 1.0 - self.diffusion_rate;
        let share = self.diffusion_rate / 8.0;

        self.scratch.resize(w * h, 0.0);
        let grid = &self.channels[channel];
        for y in 0..h {
            let north = (y + h - 1) % h;
            let south = (y + 1) % h;
            for x in 0..w {
                let west = (x + w - 1) % w;
                let east = (x + 1) % w;
                let neighbors =
                    grid[north * w + x] + grid[south * w + x] + grid[y * w + west] + grid[y * w + east];
                self.scratch[y * w + x] = grid[y * w + x] * keep + neighbors * share;
            }
        }
        std::mem::swap(&mut self.channels[channel], &mut self.scratch);
    }
}

impl TrailSubstrate for TrailField {
    fn sample(&self, position: &Position, channel: Channel) -> f64 {
        self.index_of(position)
            .map(|i| self.channels[channel.index()][i])
            .unwrap_or(0.0)
    }

    /// Negative or non-finite amounts are ignored so cells never go below zero.
    fn deposit(&mut self, position: &Position, channel: Channel, amount: f64) {
        if !(amount.is_finite() && amount > 0.0) {
            return;
        }
        if let Some(i) = self.index_of(position) {
            self.channels[channel.index()][i] += amount;
        }
    }

    fn update(&mut self) {
        for channel in Channel::ALL {
            let evaporation = self.evaporation_rate;
            self.channels[channel.index()]
                .iter_mut()
                .for_each(|v| *v *= evaporation);
            self.diffuse(channel.index());
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}
