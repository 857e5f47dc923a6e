//! Forager — the ant.
//!
//! A forager wanders out of the nest laying a search trail, follows any
//! return trail it can smell, picks up one unit of food when it stumbles
//! on a source, and then walks straight home laying a return trail of its
//! own. Nothing is planned: trails to food emerge because successful
//! foragers mark the way back and explorers steer into those marks.
//!
//! Biological analog: a harvester ant worker following recruitment
//! pheromone laid by nestmates.

use myrmex_core::agent::{Agent, AgentEvent, StepOutcome};
use myrmex_core::config::ForagerParams;
use myrmex_core::geometry::{limited_turn, rotate};
use myrmex_core::substrate::{Environment, TrailSubstrate};
use myrmex_core::types::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A trail-laying, trail-following ant.
pub struct Forager {
    id: AgentId,
    position: Position,
    /// Direction of travel; its length is always `params.speed`.
    heading: Position,
    state: ForagerState,
    carrying_food: bool,
    /// Source this forager last homed in on. Never owning; re-checked every step.
    target_food: Option<FoodHandle>,
    stuck_counter: u32,
    age_ticks: Tick,
    delivered: u64,

    nest: Position,
    bounds: Bounds,
    params: ForagerParams,
    rng: ChaCha8Rng,
}

impl Forager {
    /// A forager at the nest with an entropy-seeded random source.
    pub fn new(nest: Position, bounds: Bounds, params: ForagerParams) -> Self {
        Self::build(AgentId::new(), nest, bounds, params, ChaCha8Rng::from_entropy())
    }

    /// A forager at the nest with a deterministic ID and random source.
    pub fn with_seed(nest: Position, bounds: Bounds, params: ForagerParams, seed: u64) -> Self {
        Self::build(
            AgentId::from_seed(seed),
            nest,
            bounds,
            params,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    fn build(
        id: AgentId,
        nest: Position,
        bounds: Bounds,
        params: ForagerParams,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let heading = random_direction(&mut rng) * params.speed;
        Self {
            id,
            position: nest,
            heading,
            state: ForagerState::Exploring,
            carrying_food: false,
            target_food: None,
            stuck_counter: 0,
            age_ticks: 0,
            delivered: 0,
            nest,
            bounds,
            params,
            rng,
        }
    }

    /// Place the forager somewhere other than the nest.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Point the forager in a given direction (rescaled to its speed).
    pub fn facing(mut self, direction: Position) -> Self {
        if let Some(unit) = direction.normalized() {
            self.heading = unit * self.params.speed;
        }
        self
    }

    pub fn nest(&self) -> Position {
        self.nest
    }

    pub fn target_food(&self) -> Option<FoodHandle> {
        self.target_food
    }

    pub fn stuck_counter(&self) -> u32 {
        self.stuck_counter
    }

    /// Units of food this forager has brought home.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn params(&self) -> &ForagerParams {
        &self.params
    }

    /// Unit vector of the current heading.
    fn direction(&self) -> Position {
        self.heading
            .normalized()
            .unwrap_or_else(|| Position::from_angle(0.0))
    }

    fn toward_nest(&self) -> Option<Position> {
        (self.nest - self.position).normalized()
    }

    /// Closest food source strictly within sensing range that still holds food.
    fn closest_food(&self, env: &dyn Environment) -> Option<FoodHandle> {
        env.food_near(&self.position, self.params.food_sense_radius)
            .into_iter()
            .filter_map(|handle| {
                env.live_food(handle)
                    .map(|food| (handle, food.position().distance_to(&self.position)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(handle, _)| handle)
    }

    /// Pick a direction from the return trail ahead.
    ///
    /// Keeps the current heading unless one of the side sensors reads
    /// strictly stronger than the center; a left/right tie goes right.
    fn sense_trails(&self, field: &dyn TrailSubstrate) -> Position {
        let forward = self.direction();
        let left = rotate(&forward, -self.params.sensor_angle);
        let right = rotate(&forward, self.params.sensor_angle);
        let reach = self.params.sensor_distance;

        let read = |dir: &Position| field.sample(&(self.position + *dir * reach), Channel::Return);
        let center_strength = read(&forward);
        let left_strength = read(&left);
        let right_strength = read(&right);

        if center_strength >= left_strength.max(right_strength) {
            forward
        } else if left_strength > right_strength {
            left
        } else {
            right
        }
    }

    fn pick_up(&mut self) {
        self.carrying_food = true;
        self.state = ForagerState::Returning;
        if let Some(home) = self.toward_nest() {
            self.heading = home * self.params.speed;
        }
    }

    fn drop_food(&mut self) {
        self.carrying_food = false;
        self.state = ForagerState::Exploring;
        self.target_food = None;
        self.delivered += 1;
        self.heading = random_direction(&mut self.rng) * self.params.speed;
    }
}

/// Uniformly random unit vector.
///
/// Rejection-samples the unit disk so a degenerate zero-length draw is
/// simply drawn again.
fn random_direction(rng: &mut impl Rng) -> Position {
    loop {
        let candidate = Position::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let len = candidate.length();
        if len > 1e-9 && len <= 1.0 {
            return candidate * (1.0 / len);
        }
    }
}

impl Agent for Forager {
    fn id(&self) -> AgentId {
        self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn heading(&self) -> Position {
        self.heading
    }

    fn state(&self) -> ForagerState {
        self.state
    }

    fn carrying_food(&self) -> bool {
        self.carrying_food
    }

    fn agent_type(&self) -> &str {
        "forager"
    }

    fn step(&mut self, field: &dyn TrailSubstrate, env: &dyn Environment) -> StepOutcome {
        self.age_ticks += 1;
        let mut events = Vec::new();

        // Drop references to sources that vanished or ran dry since last tick.
        if let Some(handle) = self.target_food {
            if env.live_food(handle).is_none() {
                self.target_food = None;
            }
        }

        // 1. Look for food.
        if self.state == ForagerState::Exploring {
            self.target_food = self.closest_food(env);
            if let Some(handle) = self.target_food {
                let claimed = env.food(handle).map_or(false, |food| food.claim_unit());
                if claimed {
                    self.pick_up();
                    events.push(AgentEvent::FoodClaimed(handle));
                }
            }
        }

        // 2-3. Choose where we would like to go.
        let desired = match self.state {
            ForagerState::Exploring => {
                if self.rng.gen::<f64>() < self.params.random_turn_chance {
                    random_direction(&mut self.rng)
                } else {
                    self.sense_trails(field)
                }
            }
            ForagerState::Returning => self.toward_nest().unwrap_or_else(|| self.direction()),
        };

        // 4. Turn toward it, no faster than the turn limit allows.
        self.heading = limited_turn(
            &self.heading,
            &desired,
            self.params.max_turn_angle,
            self.params.speed,
        );

        // 5. Try to move.
        let tentative = self.position + self.heading;
        let moved = self.bounds.contains(&tentative) && !env.is_solid(&tentative);
        if moved {
            self.position = tentative;
            self.stuck_counter = 0;
        } else {
            self.stuck_counter += 1;
            if self.stuck_counter > self.params.stuck_threshold {
                self.heading = random_direction(&mut self.rng) * self.params.speed;
                self.stuck_counter = 0;
                events.push(AgentEvent::Escaped);
            }
        }

        // 6. Mark the spot.
        let deposit = Deposit {
            position: self.position,
            channel: self.state.deposit_channel(),
            amount: self.params.deposit_amount,
        };

        // 7. Home with food?
        if self.state == ForagerState::Returning
            && self.position.distance_to(&self.nest) < self.params.arrival_radius
        {
            self.drop_food();
            events.push(AgentEvent::FoodDelivered);
        }

        StepOutcome {
            deposit,
            moved,
            events,
        }
    }

    fn age(&self) -> Tick {
        self.age_ticks
    }
}
