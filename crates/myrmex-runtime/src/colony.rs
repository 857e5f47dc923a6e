//! Colony — forager lifecycle and the simulation loop.
//!
//! The colony owns the trail field, the terrain, and every forager. It
//! hatches new foragers at the nest, steps them, folds their deposits
//! back into the field, and clears away exhausted food.
//!
//! Each tick:
//! 1. The spawn policy may hatch a wave at the nest
//! 2. Every forager senses the field and scenery and steps
//! 3. The colony applies all deposits and collects events
//! 4. The field evaporates and diffuses
//! 5. Depleted food sources are removed
//! 6. The tick counter advances
//!
//! Foragers only ever read the field as it stood at the end of the
//! previous tick. Food claims are atomic, so stepping on the rayon pool
//! never hands out more units than a source holds.

use crate::terrain::Terrain;
use crate::trail_field::TrailField;
use myrmex_agents::forager::Forager;
use myrmex_agents::spawn::{NestSpawnPolicy, SpawnPolicy};
use myrmex_core::agent::{Agent, AgentEvent, StepOutcome};
use myrmex_core::config::SimulationConfig;
use myrmex_core::error::{PlacementError, Result};
use myrmex_core::food::Obstacle;
use myrmex_core::substrate::{Environment, TrailSubstrate};
use myrmex_core::types::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Event emitted by the colony during simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColonyEvent {
    /// A forager hatched.
    Spawned { id: AgentId, agent_type: String },
    /// A forager took one unit from a source.
    FoodClaimed { id: AgentId, food: FoodHandle },
    /// A forager dropped its food at the nest.
    FoodDelivered { id: AgentId, total_delivered: u64 },
    /// A blocked forager gave up and picked a random heading.
    Escaped { id: AgentId, position: Position },
    /// A source ran out and was removed.
    FoodDepleted { food: FoodHandle, position: Position },
    /// A forager was removed to honor a lower population cap.
    Evicted { id: AgentId },
    /// A tick completed.
    TickComplete { tick: Tick, alive: usize, carrying: usize },
}

/// Statistics about the colony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyStats {
    pub tick: Tick,
    pub foragers_alive: usize,
    pub foragers_carrying: usize,
    pub total_spawned: usize,
    pub total_evicted: usize,
    pub food_delivered: u64,
    pub food_sources: usize,
    pub food_remaining: u64,
    pub search_trail_mass: f64,
    pub return_trail_mass: f64,
}

/// A serializable snapshot of a forager's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForagerSnapshot {
    pub id: AgentId,
    pub agent_type: String,
    pub position: Position,
    pub heading: Position,
    pub state: ForagerState,
    pub carrying_food: bool,
    pub age: Tick,
}

/// A serializable snapshot of a food source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSnapshot {
    pub position: Position,
    pub size: u32,
    pub initial_units: u32,
    pub remaining_units: u32,
}

/// A complete serializable snapshot of the colony at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonySnapshot {
    pub tick: Tick,
    pub bounds: Bounds,
    pub nest: Position,
    pub foragers: Vec<ForagerSnapshot>,
    pub food: Vec<FoodSnapshot>,
    pub obstacles: Vec<Obstacle>,
    pub stats: ColonyStats,
    /// Full trail grids, only present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trails: Option<TrailField>,
}

/// The colony: owns the field, the terrain, and every forager.
pub struct Colony {
    field: TrailField,
    terrain: Terrain,
    agents: Vec<Box<dyn Agent>>,
    spawn_policy: Box<dyn SpawnPolicy>,
    config: SimulationConfig,
    nest: Position,
    seed: u64,
    rng: ChaCha8Rng,
    tick: Tick,
    total_spawned: usize,
    total_evicted: usize,
    food_delivered: u64,
}

impl Colony {
    /// Create a new colony with default configuration.
    pub fn new() -> Self {
        Self::build(SimulationConfig::default())
    }

    /// Create a new colony after validating `config`.
    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SimulationConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let bounds = config.field.bounds();
        let policy = NestSpawnPolicy::new(config.colony.spawn_interval, config.colony.ants_per_spawn);
        info!(
            width = bounds.width,
            height = bounds.height,
            seed,
            "colony created"
        );
        Self {
            field: TrailField::from_config(&config.field),
            terrain: Terrain::new(bounds),
            agents: Vec::new(),
            spawn_policy: Box::new(policy),
            nest: config.nest(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            tick: 0,
            total_spawned: 0,
            total_evicted: 0,
            food_delivered: 0,
        }
    }

    /// Replace the spawn policy.
    pub fn with_spawn_policy(mut self, policy: Box<dyn SpawnPolicy>) -> Self {
        self.spawn_policy = policy;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed of the master random source (forager seeds derive from it).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn nest(&self) -> Position {
        self.nest
    }

    pub fn bounds(&self) -> Bounds {
        self.terrain.bounds()
    }

    /// Ticks completed so far.
    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    /// Add an agent, unless the population is already at its cap.
    pub fn spawn(&mut self, agent: Box<dyn Agent>) -> Option<AgentId> {
        if self.agents.len() >= self.config.colony.max_population {
            debug!(cap = self.config.colony.max_population, "spawn refused: colony full");
            return None;
        }
        let id = agent.id();
        self.total_spawned += 1;
        self.agents.push(agent);
        Some(id)
    }

    /// Hatch one forager at the nest with a seed drawn from the master source.
    pub fn spawn_forager(&mut self) -> Option<AgentId> {
        let seed = self.rng.gen::<u64>();
        let forager = Forager::with_seed(
            self.nest,
            self.terrain.bounds(),
            self.config.forager.clone(),
            seed,
        );
        self.spawn(Box::new(forager))
    }

    /// Change the population cap, evicting the oldest foragers above it.
    pub fn set_max_population(&mut self, max_population: usize) -> Vec<ColonyEvent> {
        self.config.colony.max_population = max_population;
        if self.agents.len() <= max_population {
            return Vec::new();
        }

        let excess = self.agents.len() - max_population;
        let mut by_age: Vec<usize> = (0..self.agents.len()).collect();
        by_age.sort_by_key(|&i| std::cmp::Reverse(self.agents[i].age()));
        let mut evict = vec![false; self.agents.len()];
        for &i in by_age.iter().take(excess) {
            evict[i] = true;
        }

        let mut events = Vec::with_capacity(excess);
        let mut index = 0;
        self.agents.retain(|agent| {
            let keep = !evict[index];
            index += 1;
            if !keep {
                events.push(ColonyEvent::Evicted { id: agent.id() });
            }
            keep
        });
        self.total_evicted += excess;
        info!(evicted = excess, cap = max_population, "population cap lowered");
        events
    }

    /// Place a `size × size` food source anchored at `position`.
    pub fn place_food(&mut self, position: Position, size: u32) -> std::result::Result<FoodHandle, PlacementError> {
        let handle = self.terrain.place_food(position, size).map_err(|e| {
            warn!(error = %e, "food placement rejected");
            e
        })?;
        debug!(x = position.x, y = position.y, size, "food placed");
        Ok(handle)
    }

    /// Place a square obstacle with its corner at `origin`.
    pub fn place_obstacle(&mut self, origin: Position, size: f64) -> std::result::Result<(), PlacementError> {
        self.terrain.place_obstacle(origin, size).map_err(|e| {
            warn!(error = %e, "obstacle placement rejected");
            e
        })?;
        if self.terrain.is_solid(&self.nest) {
            warn!(x = origin.x, y = origin.y, "obstacle covers the nest");
        }
        debug!(x = origin.x, y = origin.y, size, "obstacle placed");
        Ok(())
    }

    /// Run a single simulation tick.
    pub fn tick(&mut self) -> Vec<ColonyEvent> {
        let mut events = Vec::new();

        // Phase 1: Hatch
        let hatch = self.spawn_policy.spawn_count(
            self.tick,
            self.agents.len(),
            self.config.colony.max_population,
        );
        let mut hatched = 0;
        for _ in 0..hatch {
            match self.spawn_forager() {
                Some(id) => {
                    hatched += 1;
                    events.push(ColonyEvent::Spawned {
                        id,
                        agent_type: "forager".to_string(),
                    });
                }
                None => break,
            }
        }
        if hatched > 0 {
            info!(tick = self.tick, hatched, alive = self.agents.len(), "spawn wave");
        }

        // Phase 2: Step every forager against last tick's field
        let field = &self.field;
        let terrain = &self.terrain;
        let step = |agent: &mut Box<dyn Agent>| {
            let outcome = agent.step(field, terrain);
            (agent.id(), agent.position(), outcome)
        };
        let outcomes: Vec<(AgentId, Position, StepOutcome)> = if self.config.colony.parallel {
            self.agents.par_iter_mut().map(step).collect()
        } else {
            self.agents.iter_mut().map(step).collect()
        };

        // Phase 3: Apply deposits and translate events
        for (id, position, outcome) in outcomes {
            self.field.apply(&outcome.deposit);
            for event in outcome.events {
                events.push(match event {
                    AgentEvent::FoodClaimed(food) => ColonyEvent::FoodClaimed { id, food },
                    AgentEvent::FoodDelivered => {
                        self.food_delivered += 1;
                        ColonyEvent::FoodDelivered {
                            id,
                            total_delivered: self.food_delivered,
                        }
                    }
                    AgentEvent::Escaped => ColonyEvent::Escaped { id, position },
                });
            }
        }

        // Phase 4: Evaporate and diffuse
        self.field.update();

        // Phase 5: Clear exhausted food
        for (food, source) in self.terrain.food_registry_mut().remove_depleted() {
            let position = source.position();
            info!(
                tick = self.tick,
                x = position.x,
                y = position.y,
                "food source depleted"
            );
            events.push(ColonyEvent::FoodDepleted { food, position });
        }

        // Phase 6: Advance
        self.tick += 1;
        let carrying = self.agents.iter().filter(|a| a.carrying_food()).count();
        debug!(
            tick = self.tick,
            alive = self.agents.len(),
            carrying,
            "tick complete"
        );
        events.push(ColonyEvent::TickComplete {
            tick: self.tick,
            alive: self.agents.len(),
            carrying,
        });

        events
    }

    /// Run the simulation for N ticks.
    pub fn run(&mut self, ticks: u64) -> Vec<Vec<ColonyEvent>> {
        let mut all_events = Vec::new();
        for _ in 0..ticks {
            all_events.push(self.tick());
        }
        all_events
    }

    /// Get colony statistics.
    pub fn stats(&self) -> ColonyStats {
        let food = self.terrain.food_registry();
        ColonyStats {
            tick: self.tick,
            foragers_alive: self.agents.len(),
            foragers_carrying: self.agents.iter().filter(|a| a.carrying_food()).count(),
            total_spawned: self.total_spawned,
            total_evicted: self.total_evicted,
            food_delivered: self.food_delivered,
            food_sources: food.len(),
            food_remaining: food.total_units(),
            search_trail_mass: self.field.total_mass(Channel::Search),
            return_trail_mass: self.field.total_mass(Channel::Return),
        }
    }

    /// Get a reference to the trail field.
    pub fn field(&self) -> &TrailField {
        &self.field
    }

    /// Get a mutable reference to the trail field.
    pub fn field_mut(&mut self) -> &mut TrailField {
        &mut self.field
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn terrain_mut(&mut self) -> &mut Terrain {
        &mut self.terrain
    }

    /// Number of foragers currently alive.
    pub fn alive_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agents(&self) -> &[Box<dyn Agent>] {
        &self.agents
    }

    /// Take a serializable snapshot of the colony's current state.
    pub fn snapshot(&self) -> ColonySnapshot {
        let foragers = self
            .agents
            .iter()
            .map(|a| ForagerSnapshot {
                id: a.id(),
                agent_type: a.agent_type().to_string(),
                position: a.position(),
                heading: a.heading(),
                state: a.state(),
                carrying_food: a.carrying_food(),
                age: a.age(),
            })
            .collect();

        let food = self
            .terrain
            .food_registry()
            .iter()
            .map(|(_, source)| FoodSnapshot {
                position: source.position(),
                size: source.size(),
                initial_units: source.initial_units(),
                remaining_units: source.remaining_units(),
            })
            .collect();

        ColonySnapshot {
            tick: self.tick,
            bounds: self.terrain.bounds(),
            nest: self.nest,
            foragers,
            food,
            obstacles: self.terrain.obstacles().to_vec(),
            stats: self.stats(),
            trails: None,
        }
    }

    /// Snapshot including both trail grids.
    pub fn snapshot_with_trails(&self) -> ColonySnapshot {
        ColonySnapshot {
            trails: Some(self.field.clone()),
            ..self.snapshot()
        }
    }
}

impl Default for Colony {
    fn default() -> Self {
        Self::new()
    }
}
