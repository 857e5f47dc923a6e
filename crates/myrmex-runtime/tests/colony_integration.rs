//! Integration tests — full colony simulation.

use myrmex_agents::spawn::NoSpawnPolicy;
use myrmex_core::agent::Agent;
use myrmex_core::config::SimulationConfig;
use myrmex_core::substrate::{Environment, TrailSubstrate};
use myrmex_core::types::*;
use myrmex_runtime::colony::{Colony, ColonyEvent};
use myrmex_runtime::trail_field::TrailField;

/// A 30×30 field with the nest in the middle and no automatic spawning.
fn small_colony(seed: u64, parallel: bool) -> Colony {
    let mut config = SimulationConfig {
        seed: Some(seed),
        ..SimulationConfig::default()
    };
    config.field.width = 30;
    config.field.height = 30;
    config.colony.parallel = parallel;
    Colony::from_config(config)
        .unwrap()
        .with_spawn_policy(Box::new(NoSpawnPolicy))
}

fn count(events: &[ColonyEvent], pred: impl Fn(&ColonyEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}

#[test]
fn spawn_waves_fill_up_to_cap() {
    let config = SimulationConfig {
        seed: Some(7),
        ..SimulationConfig::default()
    };
    let mut colony = Colony::from_config(config).unwrap();

    colony.run(69);
    assert_eq!(colony.alive_count(), 0);
    colony.tick();
    assert_eq!(colony.alive_count(), 10);

    colony.run(1000);
    assert_eq!(colony.alive_count(), 100);
    assert_eq!(colony.stats().total_spawned, 100);
}

#[test]
fn crowd_at_nest_never_overclaims() {
    for parallel in [false, true] {
        let mut colony = small_colony(11, parallel);
        let food = colony.place_food(Position::new(17.0, 15.0), 1).unwrap();
        for _ in 0..8 {
            colony.spawn_forager().unwrap();
        }

        let events = colony.tick();

        assert_eq!(count(&events, |e| matches!(e, ColonyEvent::FoodClaimed { .. })), 5);
        assert_eq!(colony.stats().foragers_carrying, 5);
        assert!(events.contains(&ColonyEvent::FoodDepleted {
            food,
            position: Position::new(17.0, 15.0),
        }));
        assert!(colony.terrain().food(food).is_none());
        assert_eq!(colony.stats().food_sources, 0);
    }
}

#[test]
fn carried_food_reaches_the_nest() {
    let mut colony = small_colony(13, false);
    colony.place_food(Position::new(17.0, 15.0), 1).unwrap();
    for _ in 0..5 {
        colony.spawn_forager().unwrap();
    }

    let history = colony.run(200);
    let delivered: usize = history
        .iter()
        .map(|events| count(events, |e| matches!(e, ColonyEvent::FoodDelivered { .. })))
        .sum();

    let stats = colony.stats();
    assert_eq!(delivered as u64, stats.food_delivered);
    assert_eq!(stats.food_delivered, 5);
    assert_eq!(stats.foragers_carrying, 0);
    assert!(stats.return_trail_mass > 0.0);
}

#[test]
fn units_are_conserved_while_foraging() {
    let mut colony = small_colony(17, false);
    colony.place_food(Position::new(22.0, 8.0), 2).unwrap();
    colony.place_food(Position::new(6.0, 24.0), 2).unwrap();
    for _ in 0..20 {
        colony.spawn_forager().unwrap();
    }

    let total = colony.stats().food_remaining;
    assert_eq!(total, 40);
    for _ in 0..400 {
        colony.tick();
        let stats = colony.stats();
        assert_eq!(
            stats.food_remaining + stats.food_delivered + stats.foragers_carrying as u64,
            total
        );
    }
}

#[test]
fn foragers_stay_in_bounds_and_out_of_walls() {
    let mut colony = small_colony(19, true);
    colony.place_obstacle(Position::new(5.0, 5.0), 4.0).unwrap();
    colony.place_obstacle(Position::new(20.0, 18.0), 3.0).unwrap();
    colony.place_food(Position::new(25.0, 25.0), 2).unwrap();
    for _ in 0..30 {
        colony.spawn_forager().unwrap();
    }

    let bounds = colony.bounds();
    for _ in 0..300 {
        let before: Vec<Position> = colony.agents().iter().map(|a| a.position()).collect();
        let events = colony.tick();
        let rerolled: Vec<AgentId> = events
            .iter()
            .filter_map(|e| match e {
                ColonyEvent::FoodDelivered { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        for (agent, start) in colony.agents().iter().zip(&before) {
            // Either the whole heading was walked or the forager stayed put.
            if !rerolled.contains(&agent.id()) {
                let p = agent.position();
                assert!(p == *start + agent.heading() || p == *start);
            }
        }
        for agent in colony.agents() {
            let p = agent.position();
            assert!(bounds.contains(&p), "forager escaped to ({}, {})", p.x, p.y);
            assert!(!colony.terrain().is_solid(&p));
            assert!((agent.heading().length() - 1.0).abs() < 1e-9);
        }
        for channel in Channel::ALL {
            assert!(colony
                .field()
                .channel(channel)
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0));
        }
    }
}

#[test]
fn same_seed_same_colony() {
    let run = || {
        let mut colony = small_colony(23, false);
        colony.place_food(Position::new(4.0, 4.0), 2).unwrap();
        for _ in 0..10 {
            colony.spawn_forager();
        }
        colony.run(150);
        colony.snapshot()
    };
    let (a, b) = (run(), run());
    assert_eq!(a.foragers, b.foragers);
    assert_eq!(a.stats, b.stats);
}

#[test]
fn abandoned_trails_fade_away() {
    let mut field = TrailField::new(Bounds::new(20, 20), 0.995, 0.1);
    field.deposit(&Position::new(10.0, 10.0), Channel::Return, 100.0);
    for _ in 0..3000 {
        field.update();
    }
    let mass = field.total_mass(Channel::Return);
    assert!(mass > 0.0);
    assert!(mass < 100.0 * 1e-3);
}
