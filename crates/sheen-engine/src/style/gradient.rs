use crate::coords::{IntPoint, IntSize, Size};
use crate::paint::{Color, SpreadMode};

use super::{Angle, AnglePercentage, LengthPercentage};

/// One entry of an authored stop list.
///
/// `T` is the external unit: [`LengthPercentage`] for linear gradients,
/// [`AnglePercentage`] for conic ones. `transition_hint` sits between the
/// previous entry and this one. A `second_position` turns the entry into a
/// flat band of `color` from `position` to `second_position`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStopListElement<T> {
    pub transition_hint: Option<T>,
    pub color: Color,
    pub position: Option<T>,
    pub second_position: Option<T>,
}

impl<T> ColorStopListElement<T> {
    /// An unpositioned stop.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { transition_hint: None, color, position: None, second_position: None }
    }

    #[inline]
    pub fn at(mut self, position: T) -> Self {
        self.position = Some(position);
        self
    }

    /// Gives the stop two positions (a hard-edged band of its color).
    #[inline]
    pub fn band(mut self, start: T, end: T) -> Self {
        self.position = Some(start);
        self.second_position = Some(end);
        self
    }

    #[inline]
    pub fn with_hint(mut self, hint: T) -> Self {
        self.transition_hint = Some(hint);
        self
    }

    /// Number of resolved stops this entry expands to.
    #[inline]
    pub fn expanded_len(&self) -> usize {
        if self.second_position.is_some() { 2 } else { 1 }
    }
}

/// Sides and corners for `to <side-or-corner>` directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SideOrCorner {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Direction of a linear gradient line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientDirection {
    /// `0deg` points up, positive angles turn clockwise.
    Angle(Angle),
    SideOrCorner(SideOrCorner),
}

impl Default for GradientDirection {
    fn default() -> Self {
        GradientDirection::SideOrCorner(SideOrCorner::Bottom)
    }
}

/// A `linear-gradient()` / `repeating-linear-gradient()` value.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradientStyle {
    pub direction: GradientDirection,
    pub color_stops: Vec<ColorStopListElement<LengthPercentage>>,
    pub spread: SpreadMode,
}

impl LinearGradientStyle {
    pub fn new(
        direction: GradientDirection,
        color_stops: Vec<ColorStopListElement<LengthPercentage>>,
    ) -> Self {
        Self { direction, color_stops, spread: SpreadMode::Pad }
    }

    /// Same gradient, tiled along its axis.
    pub fn repeating(mut self) -> Self {
        self.spread = SpreadMode::Repeat;
        self
    }

    #[inline]
    pub fn color_stop_list(&self) -> &[ColorStopListElement<LengthPercentage>] {
        &self.color_stops
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        self.spread.is_repeating()
    }

    /// Gradient angle in degrees for a box of `gradient_size`.
    ///
    /// Corner directions depend on the box aspect ratio: the line is
    /// perpendicular to the diagonal joining the two neighbouring corners.
    pub fn angle_degrees(&self, gradient_size: Size) -> f32 {
        let side_or_corner = match self.direction {
            GradientDirection::Angle(angle) => return angle.to_degrees(),
            GradientDirection::SideOrCorner(side_or_corner) => side_or_corner,
        };

        let corner_angle = || gradient_size.height.atan2(gradient_size.width).to_degrees();
        match side_or_corner {
            SideOrCorner::Top => 0.0,
            SideOrCorner::Bottom => 180.0,
            SideOrCorner::Left => 270.0,
            SideOrCorner::Right => 90.0,
            SideOrCorner::TopRight => corner_angle(),
            SideOrCorner::BottomLeft => corner_angle() + 180.0,
            SideOrCorner::TopLeft => -corner_angle(),
            SideOrCorner::BottomRight => -(corner_angle() + 180.0),
        }
    }
}

/// A `conic-gradient()` value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicGradientStyle {
    /// `from <angle>`; `0deg` points up.
    pub from_angle: Angle,
    /// `at <position>`, relative to the gradient box.
    pub position: (LengthPercentage, LengthPercentage),
    pub color_stops: Vec<ColorStopListElement<AnglePercentage>>,
}

impl ConicGradientStyle {
    /// Centered conic gradient starting at `0deg`.
    pub fn new(color_stops: Vec<ColorStopListElement<AnglePercentage>>) -> Self {
        Self {
            from_angle: Angle::default(),
            position: (LengthPercentage::Percent(50.0), LengthPercentage::Percent(50.0)),
            color_stops,
        }
    }

    pub fn from_angle(mut self, angle: Angle) -> Self {
        self.from_angle = angle;
        self
    }

    pub fn at(mut self, x: LengthPercentage, y: LengthPercentage) -> Self {
        self.position = (x, y);
        self
    }

    #[inline]
    pub fn color_stop_list(&self) -> &[ColorStopListElement<AnglePercentage>] {
        &self.color_stops
    }

    #[inline]
    pub fn angle_degrees(&self) -> f32 {
        self.from_angle.to_degrees()
    }

    /// Resolves the center against the gradient box, in box-local pixels.
    pub fn resolve_center(&self, gradient_size: IntSize) -> IntPoint {
        let (x, y) = self.position;
        IntPoint::new(
            x.resolved(gradient_size.width as f32).round() as i32,
            y.resolved(gradient_size.height as f32).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(direction: GradientDirection) -> LinearGradientStyle {
        LinearGradientStyle::new(
            direction,
            vec![ColorStopListElement::new(Color::RED), ColorStopListElement::new(Color::BLUE)],
        )
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ── angle_degrees ─────────────────────────────────────────────────────

    #[test]
    fn sides_map_to_fixed_angles() {
        let size = Size::new(200.0, 100.0);
        let cases = [
            (SideOrCorner::Top, 0.0),
            (SideOrCorner::Right, 90.0),
            (SideOrCorner::Bottom, 180.0),
            (SideOrCorner::Left, 270.0),
        ];
        for (side, expected) in cases {
            assert_eq!(linear(GradientDirection::SideOrCorner(side)).angle_degrees(size), expected);
        }
    }

    #[test]
    fn corners_on_square_box_are_diagonal() {
        let size = Size::new(100.0, 100.0);
        let angle = |c| linear(GradientDirection::SideOrCorner(c)).angle_degrees(size);
        assert!(approx(angle(SideOrCorner::TopRight), 45.0));
        assert!(approx(angle(SideOrCorner::BottomLeft), 225.0));
        assert!(approx(angle(SideOrCorner::TopLeft), -45.0));
        assert!(approx(angle(SideOrCorner::BottomRight), -225.0));
    }

    #[test]
    fn corner_angle_follows_aspect_ratio() {
        let wide = linear(GradientDirection::SideOrCorner(SideOrCorner::TopRight))
            .angle_degrees(Size::new(300.0, 100.0));
        assert!(approx(wide, (100.0f32).atan2(300.0).to_degrees()));
        assert!(wide < 45.0);
    }

    #[test]
    fn explicit_angle_is_passed_through() {
        let g = linear(GradientDirection::Angle(Angle::Turn(0.5)));
        assert!(approx(g.angle_degrees(Size::new(1.0, 1.0)), 180.0));
    }

    // ── stop list elements ────────────────────────────────────────────────

    #[test]
    fn band_expands_to_two_stops() {
        let e = ColorStopListElement::new(Color::YELLOW)
            .band(LengthPercentage::Percent(20.0), LengthPercentage::Percent(80.0));
        assert_eq!(e.expanded_len(), 2);
        assert_eq!(ColorStopListElement::<LengthPercentage>::new(Color::RED).expanded_len(), 1);
    }

    #[test]
    fn repeating_sets_spread() {
        assert!(!linear(GradientDirection::default()).is_repeating());
        assert!(linear(GradientDirection::default()).repeating().is_repeating());
    }

    // ── conic ─────────────────────────────────────────────────────────────

    #[test]
    fn conic_center_defaults_to_middle() {
        let g = ConicGradientStyle::new(vec![]);
        assert_eq!(g.resolve_center(IntSize::new(100, 60)), IntPoint::new(50, 30));
    }

    #[test]
    fn conic_center_mixes_units() {
        let g = ConicGradientStyle::new(vec![])
            .at(LengthPercentage::Px(10.0), LengthPercentage::Percent(25.0));
        assert_eq!(g.resolve_center(IntSize::new(100, 80)), IntPoint::new(10, 20));
    }
}
