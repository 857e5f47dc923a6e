//! Spawn policies for growing the colony.
//!
//! Each tick the colony asks its policy how many new foragers should
//! hatch at the nest. The policy owns its own timing state; the colony
//! owns the population cap.

use myrmex_core::types::Tick;

/// Trait for spawn policies.
pub trait SpawnPolicy: Send {
    /// Number of foragers to hatch this tick.
    ///
    /// Called exactly once per tick. The result must never push the
    /// population above `max_population`.
    fn spawn_count(&mut self, tick: Tick, alive: usize, max_population: usize) -> usize;
}

/// Hatch a wave of foragers at the nest every `interval` ticks.
///
/// The timer only resets when a wave actually hatches, so a colony held
/// at its cap spawns again on the first tick it drops below it.
pub struct NestSpawnPolicy {
    /// Ticks between waves.
    pub interval: u64,
    /// Foragers per wave.
    pub per_wave: usize,
    timer: u64,
}

impl NestSpawnPolicy {
    pub fn new(interval: u64, per_wave: usize) -> Self {
        Self {
            interval,
            per_wave,
            timer: 0,
        }
    }
}

impl SpawnPolicy for NestSpawnPolicy {
    fn spawn_count(&mut self, _tick: Tick, alive: usize, max_population: usize) -> usize {
        self.timer += 1;
        if self.timer < self.interval || alive >= max_population {
            return 0;
        }
        self.timer = 0;
        self.per_wave.min(max_population - alive)
    }
}

/// No-spawn policy: never create new foragers (static population).
pub struct NoSpawnPolicy;

impl SpawnPolicy for NoSpawnPolicy {
    fn spawn_count(&mut self, _tick: Tick, _alive: usize, _max_population: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nest_spawn_waits_for_interval() {
        let mut policy = NestSpawnPolicy::new(3, 10);
        assert_eq!(policy.spawn_count(0, 0, 100), 0);
        assert_eq!(policy.spawn_count(1, 0, 100), 0);
        assert_eq!(policy.spawn_count(2, 0, 100), 10);
        assert_eq!(policy.spawn_count(3, 10, 100), 0);
    }

    #[test]
    fn nest_spawn_respects_cap() {
        let mut policy = NestSpawnPolicy::new(1, 10);
        assert_eq!(policy.spawn_count(0, 95, 100), 5);
        assert_eq!(policy.spawn_count(1, 100, 100), 0);
    }

    #[test]
    fn capped_colony_spawns_as_soon_as_room_appears() {
        let mut policy = NestSpawnPolicy::new(2, 4);
        assert_eq!(policy.spawn_count(0, 8, 8), 0);
        assert_eq!(policy.spawn_count(1, 8, 8), 0);
        assert_eq!(policy.spawn_count(2, 8, 8), 0);
        assert_eq!(policy.spawn_count(3, 6, 8), 2);
    }

    #[test]
    fn no_spawn_never_spawns() {
        let mut policy = NoSpawnPolicy;
        assert_eq!(policy.spawn_count(100, 0, 10), 0);
    }
}
