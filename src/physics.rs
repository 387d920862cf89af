use bevy::math::DVec2;

use crate::body::Body;
use crate::resources::{G, MIN_DISTANCE};

/// How pairwise accelerations are turned into motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegrationMode {
    /// Integrate both bodies right after each pair is evaluated.
    /// With more than two bodies the result depends on pair order.
    #[default]
    LegacyPairwise,
    /// Sum the accelerations from every pair, then integrate each body once.
    #[allow(dead_code)]
    Accumulated,
}

/// Accelerations a pair of bodies impose on each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairAcceleration {
    pub first: DVec2,
    pub second: DVec2,
}

/// Newtonian attraction between `first` and `second`, as accelerations.
pub fn pair_acceleration(first: &Body, second: &Body) -> PairAcceleration {
    let delta = second.position - first.position;
    let distance = delta.length().max(MIN_DISTANCE);
    let force = G * first.mass() * second.mass() / (distance * distance);

    let angle = delta.y.atan2(delta.x);
    let direction = DVec2::new(angle.cos(), angle.sin());

    PairAcceleration {
        first: direction * force / first.mass(),
        second: -direction * force / second.mass(),
    }
}

/// Advances every body by one tick of `dt`. Never reorders or resizes `bodies`.
pub fn step(bodies: &mut [Body], dt: f64, mode: IntegrationMode) {
    match mode {
        IntegrationMode::LegacyPairwise => step_pairwise(bodies, dt),
        IntegrationMode::Accumulated => step_accumulated(bodies, dt),
    }
}

fn step_pairwise(bodies: &mut [Body], dt: f64) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let acceleration = pair_acceleration(&bodies[i], &bodies[j]);
            bodies[i].integrate(acceleration.first, dt);
            bodies[j].integrate(acceleration.second, dt);
        }
    }
}

fn step_accumulated(bodies: &mut [Body], dt: f64) {
    let mut accelerations = vec![DVec2::ZERO; bodies.len()];

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let acceleration = pair_acceleration(&bodies[i], &bodies[j]);
            accelerations[i] += acceleration.first;
            accelerations[j] += acceleration.second;
        }
    }

    for (body, acceleration) in bodies.iter_mut().zip(accelerations) {
        body.integrate(acceleration, dt);
    }
}
