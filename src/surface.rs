use bevy::prelude::*;

use crate::resources::SimulationBounds;

/// Something that can be drawn on in simulation-plane pixels
/// (origin top-left, y down).
pub trait Surface {
    fn line(&mut self, from: IVec2, to: IVec2, color: Color);
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color);
}

/// Maps simulation-plane pixels onto the world space seen by a default `Camera2d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Viewport {
    pub fn new(bounds: &SimulationBounds) -> Self {
        Self {
            size: Vec2::new(bounds.width as f32, bounds.height as f32),
        }
    }

    pub fn to_world(&self, point: IVec2) -> Vec2 {
        let half = self.size / 2.0;
        Vec2::new(point.x as f32 - half.x, half.y - point.y as f32)
    }
}

/// Immediate-mode surface backed by Bevy gizmos. Everything is redrawn every frame.
pub struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    viewport: Viewport,
}

impl<'a, 'w, 's> GizmoSurface<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, viewport: Viewport) -> Self {
        Self { gizmos, viewport }
    }
}

impl Surface for GizmoSurface<'_, '_, '_> {
    fn line(&mut self, from: IVec2, to: IVec2, color: Color) {
        self.gizmos
            .line_2d(self.viewport.to_world(from), self.viewport.to_world(to), color);
    }

    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color) {
        // Gizmos only stroke, so fill with rings one pixel apart.
        let center = Isometry2d::from_translation(self.viewport.to_world(center));
        for ring in (1..=radius).rev() {
            self.gizmos
                .circle_2d(center, ring as f32, color)
                .resolution(48);
        }
    }
}
