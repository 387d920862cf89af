mod body;
mod draw;
mod field;
mod physics;
mod resources;
mod surface;
mod systems;

use std::time::Duration;

use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowPosition, WindowResolution};
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::resources::{BACKGROUND_COLOR, TICK_MILLIS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::resources::{ResetSimulation, SimClock, SimConfig, SimSettings, SimulationBounds};
use crate::systems::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity Simulation".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                resizable: false,
                position: WindowPosition::Centered(MonitorSelection::Primary),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(
            TICK_MILLIS,
        )))
        .init_resource::<SimConfig>()
        .init_resource::<SimulationBounds>()
        .init_resource::<SimSettings>()
        .init_resource::<SimClock>()
        .init_resource::<ResetSimulation>()
        .add_systems(EguiPrimaryContextPass, ui_controls)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (apply_reset_request, draw_scene).chain())
        .add_systems(FixedUpdate, advance_simulation)
        .run();
}
