use crate::body::Body;
use crate::field::render_field;
use crate::resources::SimulationBounds;
use crate::surface::Surface;

/// Draws the field, then every body on top of it in store order.
pub fn render(surface: &mut impl Surface, bodies: &[Body], bounds: &SimulationBounds) {
    render_field(surface, bodies, bounds);

    for body in bodies {
        let center = body.position.round().as_ivec2();
        surface.fill_circle(center, body.draw_radius(), body.color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCall, RecordingSurface};
    use bevy::math::DVec2;
    use bevy::prelude::*;

    #[test]
    fn bodies_draw_after_field_in_store_order() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        let blue = Color::srgb(0.0, 0.0, 1.0);
        let bodies = [
            Body::new(DVec2::new(100.4, 200.6), DVec2::ZERO, 1e15, red).expect("valid mass"),
            Body::new(DVec2::new(300.0, 250.0), DVec2::ZERO, 10.0, blue).expect("valid mass"),
        ];
        let mut surface = RecordingSurface::default();

        render(&mut surface, &bodies, &SimulationBounds::default());

        let first_circle = surface
            .calls
            .iter()
            .position(|call| matches!(call, DrawCall::Circle { .. }))
            .expect("bodies are drawn");
        assert!(first_circle > 0, "field lines come first");
        assert_eq!(
            &surface.calls[first_circle..],
            &[
                DrawCall::Circle {
                    center: IVec2::new(100, 201),
                    radius: 34,
                    color: red,
                },
                DrawCall::Circle {
                    center: IVec2::new(300, 250),
                    radius: 3,
                    color: blue,
                },
            ]
        );
    }

    #[test]
    fn empty_store_draws_nothing() {
        let mut surface = RecordingSurface::default();
        render(&mut surface, &[], &SimulationBounds::default());
        assert!(surface.calls.is_empty());
    }
}
