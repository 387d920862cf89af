use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui;

use crate::body::BodyStore;
use crate::resources::{ResetSimulation, SimClock, SimSettings};

pub fn ui_controls(
    mut contexts: EguiContexts,
    mut settings: ResMut<SimSettings>,
    mut frames_rendered: Local<usize>,
    mut reset: ResMut<ResetSimulation>,
    store: Res<BodyStore>,
    clock: Res<SimClock>,
) {
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Window::new("Simulation")
            .default_pos(egui::pos2(10.0, 10.0))
            .default_open(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Ticks: {}", clock.ticks));
                ui.label(format!("Time: {:.2}", clock.elapsed));

                ui.separator();
                ui.heading("Bodies");
                for (index, body) in store.bodies.iter().enumerate() {
                    ui.label(format!(
                        "#{index}  pos ({:.1}, {:.1})  vel ({:.2}, {:.2})",
                        body.position.x, body.position.y, body.velocity.x, body.velocity.y
                    ));
                }
                let momentum = store.total_momentum();
                ui.label(format!(
                    "Total momentum: ({:.3e}, {:.3e})",
                    momentum.x, momentum.y
                ));

                ui.separator();
                let label = if settings.paused { "Resume" } else { "Pause" };
                if ui.button(label).clicked() {
                    settings.paused = !settings.paused;
                }
                if ui.button("Reset Simulation").clicked() {
                    reset.pending = true;
                }
            });
    }
}
