//! Approximate visualization of the combined gravitational field.
//!
//! The field is sampled on a regular grid and each sample is drawn as a short
//! segment pointing toward the net pull. Only bodies within
//! [`MAX_INFLUENCE_DISTANCE`] of a sample contribute, and segment length is
//! capped at [`MAX_VECTOR_LENGTH`]. Nothing here touches physics state.

use bevy::math::DVec2;
use bevy::prelude::IVec2;

use crate::body::Body;
use crate::resources::{
    G, GRID_SPACING, MAX_INFLUENCE_DISTANCE, MAX_VECTOR_LENGTH, MIN_DISTANCE, NEUTRAL_GRAY,
    SimulationBounds,
};
use crate::surface::Surface;

/// Sum of the pulls on a unit mass at `point` from every body in range.
pub fn field_at(point: DVec2, bodies: &[Body]) -> DVec2 {
    bodies
        .iter()
        .filter_map(|body| {
            let delta = body.position - point;
            let distance = delta.length();
            if distance > MAX_INFLUENCE_DISTANCE {
                return None;
            }

            let distance = distance.max(MIN_DISTANCE);
            let force = G * body.mass() / (distance * distance);
            let angle = delta.y.atan2(delta.x);
            Some(DVec2::new(angle.cos(), angle.sin()) * force)
        })
        .sum()
}

/// Offset of the segment drawn at `point`, or `None` when there is no pull.
pub fn field_vector(point: DVec2, bodies: &[Body]) -> Option<DVec2> {
    let total = field_at(point, bodies);
    let magnitude = total.length();
    if magnitude == 0.0 {
        return None;
    }

    Some(total / magnitude * magnitude.min(MAX_VECTOR_LENGTH))
}

/// Draws one segment per grid sample over `[0, width) x [0, height)`.
pub fn render_field(surface: &mut impl Surface, bodies: &[Body], bounds: &SimulationBounds) {
    for x in (0..bounds.width as i32).step_by(GRID_SPACING) {
        for y in (0..bounds.height as i32).step_by(GRID_SPACING) {
            let origin = IVec2::new(x, y);
            let Some(offset) = field_vector(origin.as_dvec2(), bodies) else {
                continue;
            };

            // Truncates toward zero.
            let end = (origin.as_dvec2() + offset).as_ivec2();
            surface.line(origin, end, NEUTRAL_GRAY);
        }
    }
}
