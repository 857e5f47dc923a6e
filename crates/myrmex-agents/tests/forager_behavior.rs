//! Forager behavior against the real trail field and terrain.

use myrmex_agents::forager::Forager;
use myrmex_core::agent::{Agent, AgentEvent};
use myrmex_core::config::ForagerParams;
use myrmex_core::geometry::angle_between;
use myrmex_core::substrate::{Environment, TrailSubstrate};
use myrmex_core::types::*;
use myrmex_runtime::terrain::Terrain;
use myrmex_runtime::trail_field::TrailField;
use std::f64::consts::FRAC_PI_6;

fn steady() -> ForagerParams {
    ForagerParams {
        random_turn_chance: 0.0,
        ..ForagerParams::default()
    }
}

#[test]
fn explorer_turns_into_return_trail() {
    let bounds = Bounds::new(40, 40);
    let mut field = TrailField::new(bounds, 0.995, 0.1);
    // Right-hand sensor from (10, 10) facing +x sits at about (12.6, 11.5).
    field.deposit(&Position::new(12.6, 11.5), Channel::Return, 4.0);
    let terrain = Terrain::new(bounds);

    let mut forager = Forager::with_seed(Position::new(20.0, 20.0), bounds, steady(), 1)
        .at(Position::new(10.0, 10.0))
        .facing(Position::new(1.0, 0.0));
    let outcome = forager.step(&field, &terrain);

    assert!(outcome.moved);
    assert!((forager.heading().angle() - FRAC_PI_6).abs() < 1e-9);
    assert_eq!(outcome.deposit.channel, Channel::Search);
}

#[test]
fn search_trail_does_not_steer() {
    let bounds = Bounds::new(40, 40);
    let mut field = TrailField::new(bounds, 0.995, 0.1);
    field.deposit(&Position::new(12.6, 11.5), Channel::Search, 4.0);
    let terrain = Terrain::new(bounds);

    let mut forager = Forager::with_seed(Position::new(20.0, 20.0), bounds, steady(), 1)
        .at(Position::new(10.0, 10.0))
        .facing(Position::new(1.0, 0.0));
    forager.step(&field, &terrain);

    assert!(forager.heading().angle().abs() < 1e-9);
}

#[test]
fn blocked_forager_escapes_the_wall() {
    let bounds = Bounds::new(40, 40);
    let field = TrailField::new(bounds, 0.995, 0.1);
    let mut terrain = Terrain::new(bounds);
    terrain.place_obstacle(Position::new(11.0, 0.0), 29.0).unwrap();

    let mut forager = Forager::with_seed(Position::new(5.0, 20.0), bounds, steady(), 8)
        .at(Position::new(10.5, 20.0))
        .facing(Position::new(1.0, 0.0));

    let mut escaped = false;
    let mut moved = 0;
    for _ in 0..200 {
        let outcome = forager.step(&field, &terrain);
        escaped |= outcome.events.contains(&AgentEvent::Escaped);
        if outcome.moved {
            moved += 1;
        }
        assert!(!terrain.is_solid(&forager.position()));
        assert!(bounds.contains(&forager.position()));
    }
    assert!(escaped);
    assert!(moved > 0);
}

#[test]
fn stale_food_handle_is_dropped() {
    let bounds = Bounds::new(20, 20);
    let field = TrailField::new(bounds, 0.995, 0.1);
    let mut terrain = Terrain::new(bounds);
    let handle = terrain.place_food(Position::new(15.0, 15.0), 1).unwrap();

    let mut forager = Forager::with_seed(Position::new(2.0, 2.0), bounds, steady(), 5)
        .at(Position::new(13.0, 15.0))
        .facing(Position::new(-1.0, 0.0));
    forager.step(&field, &terrain);
    assert!(forager.carrying_food());
    assert_eq!(forager.target_food(), Some(handle));

    terrain.food_registry_mut().remove(handle);
    forager.step(&field, &terrain);
    assert!(forager.target_food().is_none());
    assert!(forager.carrying_food());
}

#[test]
fn ordinary_steps_respect_turn_limit() {
    let bounds = Bounds::new(60, 40);
    let mut field = TrailField::new(bounds, 0.995, 0.1);
    let mut terrain = Terrain::new(bounds);
    terrain.place_obstacle(Position::new(20.0, 10.0), 5.0).unwrap();
    terrain.place_food(Position::new(45.0, 30.0), 3).unwrap();
    let params = ForagerParams::default();
    let max_turn = params.max_turn_angle;

    let mut foragers: Vec<Forager> = (0..10)
        .map(|seed| Forager::with_seed(Position::new(30.0, 20.0), bounds, params.clone(), seed))
        .collect();

    for _ in 0..500 {
        let mut deposits = Vec::new();
        for forager in &mut foragers {
            let before = forager.heading();
            let start = forager.position();
            let outcome = forager.step(&field, &terrain);
            let forced = outcome.events.iter().any(|e| {
                matches!(
                    e,
                    AgentEvent::Escaped | AgentEvent::FoodClaimed(_) | AgentEvent::FoodDelivered
                )
            });
            if !forced {
                let turned = angle_between(&before, &forager.heading()).abs();
                assert!(turned <= max_turn + 1e-9, "turned {turned} rad in one step");
            }
            // A drop at the nest re-rolls the heading after the move.
            if !outcome.events.contains(&AgentEvent::FoodDelivered) {
                if outcome.moved {
                    assert_eq!(forager.position(), start + forager.heading());
                } else {
                    assert_eq!(forager.position(), start);
                }
            }
            assert!((forager.heading().length() - params.speed).abs() < 1e-9);
            assert!(bounds.contains(&forager.position()));
            assert!(!terrain.is_solid(&forager.position()));
            deposits.push(outcome.deposit);
        }
        for deposit in &deposits {
            field.apply(deposit);
        }
        field.update();
    }
}
