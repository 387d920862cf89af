use bevy::prelude::*;

use crate::body::BodyStore;
use crate::draw::render;
use crate::physics::step;
use crate::resources::*;
use crate::surface::{GizmoSurface, Viewport};

/// Sets up the camera and seeds the body store.
pub fn setup_scene(mut commands: Commands, bounds: Res<SimulationBounds>) -> Result {
    commands.spawn(Camera2d);

    let store = BodyStore::initial(&bounds)?;
    info!(
        "seeded {} bodies on a {}x{} plane",
        store.bodies.len(),
        bounds.width,
        bounds.height
    );
    commands.insert_resource(store);
    Ok(())
}

/// Runs one physics tick on every fixed-timestep update.
pub fn advance_simulation(
    mut store: ResMut<BodyStore>,
    mut clock: ResMut<SimClock>,
    config: Res<SimConfig>,
    settings: Res<SimSettings>,
) {
    if settings.paused {
        return;
    }

    step(&mut store.bodies, config.dt, config.mode);
    clock.advance(config.dt);

    if clock.ticks % LOG_EVERY_TICKS == 0 {
        for (index, body) in store.bodies.iter().enumerate() {
            debug!(
                tick = clock.ticks,
                body = index,
                "position {:?} velocity {:?}",
                body.position,
                body.velocity
            );
        }
    }
}

/// Redraws the field and bodies from the current store.
pub fn draw_scene(mut gizmos: Gizmos, store: Res<BodyStore>, bounds: Res<SimulationBounds>) {
    let mut surface = GizmoSurface::new(&mut gizmos, Viewport::new(&bounds));
    render(&mut surface, &store.bodies, &bounds);
}

/// Responds to a pending reset: restores the initial bodies and clears the clock.
pub fn apply_reset_request(
    mut reset: ResMut<ResetSimulation>,
    mut store: ResMut<BodyStore>,
    mut clock: ResMut<SimClock>,
    mut settings: ResMut<SimSettings>,
    bounds: Res<SimulationBounds>,
) -> Result {
    if !reset.pending {
        return Ok(());
    }
    reset.pending = false;

    *store = BodyStore::initial(&bounds)?;
    *settings = SimSettings::default();
    info!(
        "simulation reset after {} ticks ({:.2} time units)",
        clock.ticks, clock.elapsed
    );
    *clock = SimClock::default();
    Ok(())
}
