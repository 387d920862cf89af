use bevy::prelude::*;

use crate::physics::IntegrationMode;

// --- Physics ---
/// Gravitational constant.
pub const G: f64 = 6.67430e-11;
/// Simulated time advanced by one tick.
pub const DEFAULT_DT: f64 = 0.05;
/// Real time between two ticks.
pub const TICK_MILLIS: u64 = 4;
/// Distances below this are clamped before any inverse-square term.
pub const MIN_DISTANCE: f64 = 1.0;

// --- Field visualization ---
/// Spacing of the field sample grid, in pixels.
pub const GRID_SPACING: usize = 15;
/// Longest field vector that will be drawn.
pub const MAX_VECTOR_LENGTH: f64 = 50.0;
/// Bodies farther than this from a sample point are ignored.
pub const MAX_INFLUENCE_DISTANCE: f64 = 300.0;

// --- Scene ---
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const BACKGROUND_COLOR: Color = Color::WHITE;
/// AWT light gray, shared by field lines and the seeded bodies.
pub const NEUTRAL_GRAY: Color = Color::srgb(0.753, 0.753, 0.753);
pub const INITIAL_MASS: f64 = 1e15;
pub const INITIAL_SPEED: f64 = 10.0;
/// Body state is logged at debug level every this many ticks.
pub const LOG_EVERY_TICKS: u64 = 250;

/// Physics parameters for each tick.
#[derive(Resource)]
pub struct SimConfig {
    pub dt: f64,
    pub mode: IntegrationMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            mode: IntegrationMode::default(),
        }
    }
}

/// Size of the simulation plane, in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SimulationBounds {
    pub width: u32,
    pub height: u32,
}

impl Default for SimulationBounds {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

/// User-facing toggles.
#[derive(Resource, Default)]
pub struct SimSettings {
    pub paused: bool,
}

/// Ticks run and simulated time elapsed since the last reset.
#[derive(Resource, Default, Debug)]
pub struct SimClock {
    pub ticks: u64,
    pub elapsed: f64,
}

impl SimClock {
    pub fn advance(&mut self, dt: f64) {
        self.ticks += 1;
        self.elapsed += dt;
    }
}

/// Marker resource to request a simulation reset from the UI.
#[derive(Resource, Default)]
pub struct ResetSimulation {
    pub pending: bool,
}
