use std::fmt;

use bevy::math::DVec2;
use bevy::prelude::{Color, Resource};

use crate::resources::{INITIAL_MASS, INITIAL_SPEED, NEUTRAL_GRAY, SimulationBounds};

/// Smallest radius a body is ever drawn with.
pub const MIN_DRAW_RADIUS: i32 = 3;

/// Reasons a body cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    NonPositiveMass(f64),
    NonFiniteMass(f64),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::NonPositiveMass(mass) => {
                write!(f, "body mass must be positive, got {mass}")
            }
            BodyError::NonFiniteMass(mass) => write!(f, "body mass must be finite, got {mass}"),
        }
    }
}

impl std::error::Error for BodyError {}

/// A point mass in the simulation plane (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    mass: f64,
    display_radius: i32,
    color: Color,
}

impl Body {
    /// Creates a body, rejecting masses that would poison the inverse-square terms.
    pub fn new(
        position: DVec2,
        velocity: DVec2,
        mass: f64,
        color: Color,
    ) -> Result<Self, BodyError> {
        if !mass.is_finite() {
            return Err(BodyError::NonFiniteMass(mass));
        }
        if mass <= 0.0 {
            return Err(BodyError::NonPositiveMass(mass));
        }

        Ok(Self {
            position,
            velocity,
            mass,
            display_radius: (mass.ln() * 2.0) as i32,
            color,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Size derived from `ln(mass)` at construction.
    pub fn display_radius(&self) -> i32 {
        self.display_radius
    }

    /// Radius of the filled marker on screen.
    pub fn draw_radius(&self) -> i32 {
        (self.display_radius / 2).max(MIN_DRAW_RADIUS)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Explicit Euler: velocity first, then position with the new velocity.
    pub fn integrate(&mut self, acceleration: DVec2, dt: f64) {
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }
}

/// Ordered set of simulated bodies. Order drives both pair iteration and draw order.
#[derive(Resource, Debug, Clone)]
pub struct BodyStore {
    pub bodies: Vec<Body>,
}

impl BodyStore {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    /// Two equal masses on the horizontal midline, moving in opposite directions.
    pub fn initial(bounds: &SimulationBounds) -> Result<Self, BodyError> {
        let width = f64::from(bounds.width);
        let height = f64::from(bounds.height);

        Ok(Self::new(vec![
            Body::new(
                DVec2::new(width / 3.0, height / 2.0),
                DVec2::new(0.0, INITIAL_SPEED),
                INITIAL_MASS,
                NEUTRAL_GRAY,
            )?,
            Body::new(
                DVec2::new(2.0 * width / 3.0, height / 2.0),
                DVec2::new(0.0, -INITIAL_SPEED),
                INITIAL_MASS,
                NEUTRAL_GRAY,
            )?,
        ]))
    }

    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
