use crate::coords::{IntPoint, IntRect, Vec2};
use crate::gradient::{ConicGradientData, GradientLine};
use crate::paint::Painter;

/// Number of entries in a conic gradient line: one per whole degree.
const CONIC_LINE_COLORS: usize = 360;

/// Paints a resolved conic gradient into `gradient_rect` around `position`
/// (rect-local pixels).
///
/// Angles are floored to whole degrees and looked up without blending
/// between neighbouring entries, so there is no sub-degree smoothing the way
/// linear gradients get it.
pub fn paint_conic_gradient<P: Painter + ?Sized>(
    painter: &mut P,
    gradient_rect: IntRect,
    data: &ConicGradientData,
    position: IntPoint,
) {
    if gradient_rect.is_empty() {
        return;
    }

    log::trace!(
        "conic gradient: start={}deg center=({}, {}) stops={}",
        data.start_angle,
        position.x,
        position.y,
        data.color_stops.len()
    );

    let gradient_line = GradientLine::new(CONIC_LINE_COLORS, &data.color_stops);

    // atan2 measures from +X counter-clockwise in a y-down frame; CSS measures
    // from "up", clockwise, starting at `start_angle`.
    let start_angle = ((360.0 - data.start_angle) + 90.0).rem_euclid(360.0);
    // Sample around the center of the pixel at `position`.
    let center_point = Vec2::from(position).translated(0.5, 0.5);

    gradient_line.paint_into_rect(painter, gradient_rect, |x, y| {
        let point = Vec2::new(x as f32, y as f32) - center_point;
        // Floor, or colors drift apart further from the center.
        (point.y.atan2(point.x).to_degrees() + 360.0 + start_angle)
            .rem_euclid(360.0)
            .floor()
    });
}
