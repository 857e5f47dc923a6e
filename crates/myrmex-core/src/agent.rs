//! Agent — the fundamental unit of the colony.
//!
//! Every agent is an isolated forager: it senses the trail field and the
//! scenery around it, decides where to go, and reports what it did. The
//! colony owns the agents and applies their deposits to the field.

use crate::substrate::{Environment, TrailSubstrate};
use crate::types::*;
use serde::Serialize;

/// Something notable that happened to an agent during a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AgentEvent {
    /// Claimed one unit of food from a source.
    FoodClaimed(FoodHandle),
    /// Dropped its food at the nest.
    FoodDelivered,
    /// Gave up on a blocked direction and picked a random heading.
    Escaped,
}

/// Everything an agent reports back from one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Signal to add to the field once every agent has stepped.
    pub deposit: Deposit,
    /// Whether the tentative move was accepted.
    pub moved: bool,
    pub events: Vec<AgentEvent>,
}

/// A foraging agent.
///
/// `step` is the only entry point that changes an agent. It must never
/// panic on degenerate input: invalid moves are rejected, missing food
/// is treated as no food, and empty directions fall back to the current
/// heading.
pub trait Agent: Send {
    /// The agent's unique identity.
    fn id(&self) -> AgentId;

    /// The agent's current position in the field.
    fn position(&self) -> Position;

    /// Current heading; its length is the agent's speed.
    fn heading(&self) -> Position;

    fn state(&self) -> ForagerState;

    fn carrying_food(&self) -> bool;

    /// The agent's type name (for display and logging).
    fn agent_type(&self) -> &str;

    /// Execute one tick of the agent's behavior.
    ///
    /// `field` holds the previous tick's trail values.
    fn step(&mut self, field: &dyn TrailSubstrate, env: &dyn Environment) -> StepOutcome;

    /// How many ticks this agent has been alive.
    fn age(&self) -> Tick;
}
