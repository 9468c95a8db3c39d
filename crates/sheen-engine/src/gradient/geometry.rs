use crate::coords::IntSize;

/// Converts a CSS gradient angle (0° up, clockwise) to radians where 0 points
/// along +X, the frame used by the projection math.
#[inline]
pub fn normalized_gradient_angle_radians(angle_degrees: f32) -> f32 {
    (90.0 - angle_degrees).to_radians()
}

/// Length of the gradient line for a box of `size` along the direction
/// given by `sin_angle` / `cos_angle`.
///
/// This is the projection of the box onto the line, so the line spans the
/// box exactly corner to corner.
#[inline]
pub fn gradient_length(size: IntSize, sin_angle: f32, cos_angle: f32) -> f32 {
    (size.height as f32 * sin_angle).abs() + (size.width as f32 * cos_angle).abs()
}

#[inline]
pub fn gradient_length_for_angle(size: IntSize, angle_degrees: f32) -> f32 {
    let (sin_angle, cos_angle) = normalized_gradient_angle_radians(angle_degrees).sin_cos();
    gradient_length(size, sin_angle, cos_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn zero_degrees_points_up() {
        assert!(approx(normalized_gradient_angle_radians(0.0), FRAC_PI_2));
    }

    #[test]
    fn ninety_degrees_points_right() {
        assert!(approx(normalized_gradient_angle_radians(90.0), 0.0));
        assert!(approx(normalized_gradient_angle_radians(270.0), -PI));
    }

    #[test]
    fn axis_aligned_lengths_match_box_sides() {
        let size = IntSize::new(200, 100);
        assert!(approx(gradient_length_for_angle(size, 0.0), 100.0));
        assert!(approx(gradient_length_for_angle(size, 90.0), 200.0));
        assert!(approx(gradient_length_for_angle(size, 180.0), 100.0));
    }

    #[test]
    fn diagonal_length_on_square_box() {
        let len = gradient_length_for_angle(IntSize::new(100, 100), 45.0);
        assert!(approx(len, 100.0 * 2.0f32.sqrt()));
    }

    #[test]
    fn length_is_symmetric_under_half_turn() {
        let size = IntSize::new(37, 91);
        assert!(approx(gradient_length_for_angle(size, 30.0), gradient_length_for_angle(size, 210.0)));
    }
}
