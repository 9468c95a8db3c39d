use crate::coords::{IntRect, Vec2};
use crate::gradient::{
    GradientLine, LinearGradientData, gradient_length, normalized_gradient_angle_radians,
};
use crate::paint::Painter;

/// Paints a resolved linear gradient into `gradient_rect`.
///
/// Each pixel is projected onto the gradient line by rotating it into a frame
/// where the line is horizontal; the projected distance from the line's start
/// point indexes a [`GradientLine`] of one color per pixel of line length.
///
/// Repeating gradients build a single tile (`repeat_length` of the line) that
/// starts at the first stop and wraps on lookup.
pub fn paint_linear_gradient<P: Painter + ?Sized>(
    painter: &mut P,
    gradient_rect: IntRect,
    data: &LinearGradientData,
) {
    if gradient_rect.is_empty() {
        return;
    }

    let angle = normalized_gradient_angle_radians(data.gradient_angle);
    let (sin_angle, cos_angle) = angle.sin_cos();

    let gradient_length_px = gradient_length(gradient_rect.size, sin_angle, cos_angle).round() as i32;
    let half_length = gradient_length_px as f32 / 2.0;
    let offset = Vec2::new(cos_angle * half_length, sin_angle * half_length);

    let local_rect = gradient_rect.translated(-gradient_rect.x(), -gradient_rect.y());
    let start_point = Vec2::from(local_rect.center()) - offset;

    // Rotate the gradient line to be horizontal.
    let rotated_start_point_x = start_point.x * cos_angle - start_point.y * -sin_angle;

    let repeating = data.repeat_length.is_some();
    let color_count = (data.repeat_length.unwrap_or(1.0) * gradient_length_px as f32).round() as usize;
    let start_offset = if repeating { data.color_stops[0].position } else { 0.0 };
    let start_offset_px = (start_offset * gradient_length_px as f32).round() as i32;

    log::trace!(
        "linear gradient: angle={}deg length={}px colors={} repeating={}",
        data.gradient_angle,
        gradient_length_px,
        color_count,
        repeating
    );

    let gradient_line = GradientLine::with_layout(
        color_count,
        gradient_length_px,
        start_offset_px,
        repeating,
        &data.color_stops,
    );

    let height = gradient_rect.height() as f32;
    gradient_line.paint_into_rect(painter, gradient_rect, |x, y| {
        (x as f32 * cos_angle - (height - y as f32) * -sin_angle) - rotated_start_point_x
    });
}
