//! Angle helpers used by steering.

use crate::types::Position;
use std::f64::consts::{PI, TAU};

/// Wrap an angle into `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let mut a = angle.rem_euclid(TAU);
    if a > PI {
        a -= TAU;
    }
    a
}

/// Signed angle needed to rotate `from` onto `to`, wrapped into `(-π, π]`.
pub fn angle_between(from: &Position, to: &Position) -> f64 {
    wrap_angle(to.angle() - from.angle())
}

/// Rotate a vector by `angle` radians, preserving its length.
pub fn rotate(v: &Position, angle: f64) -> Position {
    let (sin, cos) = angle.sin_cos();
    Position::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Turn `current` toward `desired` by at most `max_turn` radians.
///
/// The result has magnitude `speed`. A zero `desired` vector leaves the
/// direction unchanged.
pub fn limited_turn(current: &Position, desired: &Position, max_turn: f64, speed: f64) -> Position {
    let current_angle = current.angle();
    let delta = if desired.length() < f64::EPSILON {
        0.0
    } else {
        angle_between(current, desired).clamp(-max_turn, max_turn)
    };
    Position::from_angle(current_angle + delta) * speed
}
