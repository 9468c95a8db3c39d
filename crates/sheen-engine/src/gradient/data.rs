use crate::coords::Size;
use crate::style::{ConicGradientStyle, LinearGradientStyle};

use super::{ColorStopList, gradient_length_for_angle, resolve_color_stop_positions};

/// A linear gradient resolved for one gradient box.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradientData {
    pub gradient_angle: f32,
    pub color_stops: ColorStopList,
    /// Span of one tile (last minus first stop position); set only when repeating.
    pub repeat_length: Option<f32>,
}

/// A conic gradient resolved to a full turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicGradientData {
    pub start_angle: f32,
    pub color_stops: ColorStopList,
}

/// Resolves stop positions as fractions of the gradient line for a box of
/// `gradient_size`.
pub fn resolve_linear_gradient_data(
    gradient_size: Size,
    linear_gradient: &LinearGradientStyle,
) -> LinearGradientData {
    let gradient_angle = linear_gradient.angle_degrees(gradient_size);
    let gradient_length_px = gradient_length_for_angle(gradient_size.to_rounded(), gradient_angle);

    let color_stops =
        resolve_color_stop_positions(linear_gradient.color_stop_list(), |length_percentage| {
            length_percentage.resolved(gradient_length_px) / gradient_length_px
        });

    let repeat_length = linear_gradient.is_repeating().then(|| {
        let first = color_stops[0].position;
        let last = color_stops[color_stops.len() - 1].position;
        last - first
    });

    LinearGradientData { gradient_angle, color_stops, repeat_length }
}

/// Resolves stop positions as fractions of a full turn.
pub fn resolve_conic_gradient_data(conic_gradient: &ConicGradientStyle) -> ConicGradientData {
    const ONE_TURN_DEGREES: f32 = 360.0;

    let color_stops =
        resolve_color_stop_positions(conic_gradient.color_stop_list(), |angle_percentage| {
            angle_percentage.resolved_degrees(ONE_TURN_DEGREES) / ONE_TURN_DEGREES
        });

    ConicGradientData { start_angle: conic_gradient.angle_degrees(), color_stops }
}
