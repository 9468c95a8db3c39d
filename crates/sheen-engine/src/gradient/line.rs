use crate::coords::IntRect;
use crate::paint::{Color, Painter};

use super::{ColorStop, color_stop_step};

/// Colors of a gradient sampled at one-pixel steps along its axis.
///
/// Entry `i` holds the color at `(i + start_offset) / gradient_length` on the
/// normalized gradient line. Repeating lines hold a single tile
/// (`color_count < gradient_length`) and wrap on lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLine {
    colors: Vec<Color>,
    start_offset: i32,
    repeating: bool,
}

impl GradientLine {
    /// Non-repeating line whose length equals its color count.
    pub fn new(color_count: usize, color_stops: &[ColorStop]) -> Self {
        let length = i32::try_from(color_count).unwrap_or(i32::MAX);
        Self::with_layout(color_count, length, 0, false, color_stops)
    }

    /// Builds a line of `color_count` entries.
    ///
    /// Each entry blends the stops pairwise, in order, starting from the first
    /// stop's color. [`color_stop_step`] saturates outside its own segment, so
    /// only the segment containing the position changes the running color.
    /// This matches the exact per-segment interpolation for adjacent-stop
    /// hints; interactions across non-adjacent segments are not modelled.
    ///
    /// # Panics
    /// Panics if fewer than two stops are given.
    pub fn with_layout(
        color_count: usize,
        gradient_length: i32,
        start_offset: i32,
        repeating: bool,
        color_stops: &[ColorStop],
    ) -> Self {
        assert!(
            color_stops.len() >= 2,
            "gradient line needs at least two color stops, got {}",
            color_stops.len()
        );

        let color_count = color_count.max(1);
        let gradient_length = gradient_length.max(1);

        let colors = (0..color_count)
            .map(|i| {
                let relative_loc = (i as f32 + start_offset as f32) / gradient_length as f32;
                blend_stops(color_stops, relative_loc)
            })
            .collect();

        Self { colors, start_offset, repeating }
    }

    #[inline]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Color at `index`, clamped to the first/last entry.
    #[inline]
    pub fn get_color(&self, index: i32) -> Color {
        let last = self.colors.len() - 1;
        let index = usize::try_from(index).unwrap_or(0).min(last);
        self.colors[index]
    }

    /// Color at fractional axis position `loc` (pixels from the gradient start).
    ///
    /// Blends the two neighbouring entries by the fractional part, which hides
    /// banding at shallow angles. Repeating lines wrap; others clamp.
    /// Non-finite positions sample the start of the line.
    pub fn sample_color(&self, loc: f32) -> Color {
        let loc = if loc.is_finite() { loc } else { 0.0 };
        let base = loc.floor();
        let blend = loc - base;
        let index = base as i32;

        let current = self.get_color(self.wrap(index));
        let next = self.get_color(self.wrap(index.saturating_add(1)));
        current.mixed_with(next, blend)
    }

    /// Writes `sample_color(location_transform(x, y))` for every pixel of
    /// `rect`. The transform receives rect-local coordinates.
    pub fn paint_into_rect<P, F>(&self, painter: &mut P, rect: IntRect, location_transform: F)
    where
        P: Painter + ?Sized,
        F: Fn(i32, i32) -> f32,
    {
        for y in 0..rect.height() {
            for x in 0..rect.width() {
                let color = self.sample_color(location_transform(x, y));
                painter.set_pixel(rect.x() + x, rect.y() + y, color, !color.is_opaque());
            }
        }
    }

    #[inline]
    fn wrap(&self, index: i32) -> i32 {
        if !self.repeating {
            return index;
        }
        let count = self.colors.len() as i64;
        (i64::from(index) - i64::from(self.start_offset)).rem_euclid(count) as i32
    }
}

fn blend_stops(color_stops: &[ColorStop], position: f32) -> Color {
    color_stops.windows(2).fold(color_stops[0].color, |color, pair| {
        color.mixed_with(pair[1].color, color_stop_step(&pair[0], &pair[1], position))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop(a: Color, b: Color) -> Vec<ColorStop> {
        vec![ColorStop::new(a, 0.0), ColorStop::new(b, 1.0)]
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn two_stop_line_matches_closed_form() {
        let stops = two_stop(Color::RED, Color::from_rgba(0, 0, 255, 64));
        let line = GradientLine::new(100, &stops);
        for (i, color) in line.colors().iter().enumerate() {
            let t = i as f32 / 100.0;
            assert_eq!(*color, stops[0].color.mixed_with(stops[1].color, t), "i = {i}");
        }
    }

    #[test]
    fn hinted_two_stop_line_matches_closed_form() {
        let stops = vec![ColorStop::new(Color::RED, 0.0), ColorStop::new(Color::BLUE, 1.0).with_hint(0.3)];
        let line = GradientLine::new(64, &stops);
        let exponent = 0.5f32.ln() / 0.3f32.ln();
        for (i, color) in line.colors().iter().enumerate() {
            let t = i as f32 / 64.0;
            assert_eq!(*color, Color::RED.mixed_with(Color::BLUE, t.powf(exponent)), "i = {i}");
        }
    }

    #[test]
    fn midpoint_is_even_mix() {
        let line = GradientLine::new(100, &two_stop(Color::RED, Color::BLUE));
        assert_eq!(line.get_color(50), Color::RED.mixed_with(Color::BLUE, 0.5));
        assert_eq!(line.get_color(50), Color::from_rgb(128, 0, 128));
    }

    #[test]
    fn multi_stop_line_hits_stop_colors_exactly() {
        let stops = vec![
            ColorStop::new(Color::RED, 0.0),
            ColorStop::new(Color::GREEN, 0.5),
            ColorStop::new(Color::BLUE, 1.0),
        ];
        let line = GradientLine::with_layout(101, 100, 0, false, &stops);
        assert_eq!(line.get_color(0), Color::RED);
        assert_eq!(line.get_color(50), Color::GREEN);
        assert_eq!(line.get_color(100), Color::BLUE);
        assert_eq!(line.get_color(25), Color::RED.mixed_with(Color::GREEN, 0.5));
        assert_eq!(line.get_color(75), Color::GREEN.mixed_with(Color::BLUE, 0.5));
    }

    #[test]
    fn double_stop_band_is_flat() {
        let stops = vec![
            ColorStop::new(Color::RED, 0.0),
            ColorStop::new(Color::YELLOW, 0.2),
            ColorStop::new(Color::YELLOW, 0.8),
            ColorStop::new(Color::BLUE, 1.0),
        ];
        let line = GradientLine::new(100, &stops);
        for i in 20..=80 {
            assert_eq!(line.get_color(i), Color::YELLOW, "i = {i}");
            assert_eq!(line.sample_color(i as f32), Color::YELLOW, "i = {i}");
        }
        assert_eq!(line.sample_color(42.5), Color::YELLOW);
    }

    #[test]
    fn coincident_stops_make_a_hard_edge() {
        let stops = vec![
            ColorStop::new(Color::RED, 0.0),
            ColorStop::new(Color::RED, 0.5),
            ColorStop::new(Color::BLUE, 0.5),
            ColorStop::new(Color::BLUE, 1.0),
        ];
        let line = GradientLine::new(10, &stops);
        assert_eq!(line.get_color(4), Color::RED);
        assert_eq!(line.get_color(5), Color::BLUE);
    }

    #[test]
    fn zero_color_count_is_clamped() {
        let line = GradientLine::with_layout(0, 0, 0, true, &two_stop(Color::RED, Color::BLUE));
        assert_eq!(line.color_count(), 1);
        assert_eq!(line.sample_color(12.3), Color::RED);
    }

    #[test]
    #[should_panic(expected = "at least two color stops")]
    fn single_stop_line_panics() {
        GradientLine::new(10, &[ColorStop::new(Color::RED, 0.0)]);
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn get_color_clamps_out_of_range() {
        let line = GradientLine::new(10, &two_stop(Color::WHITE, Color::BLACK));
        assert_eq!(line.get_color(-5), line.get_color(0));
        assert_eq!(line.get_color(i32::MIN), line.get_color(0));
        assert_eq!(line.get_color(10), line.get_color(9));
        assert_eq!(line.get_color(i32::MAX), line.get_color(9));
    }

    #[test]
    fn sample_color_blends_neighbours() {
        let line = GradientLine::new(2, &two_stop(Color::BLACK, Color::WHITE));
        // Entries: [black, 50% gray]; halfway between them is 25% gray.
        let mid = line.sample_color(0.5);
        assert_eq!(mid, line.get_color(0).mixed_with(line.get_color(1), 0.5));
    }

    #[test]
    fn sample_color_clamps_non_repeating() {
        let line = GradientLine::new(10, &two_stop(Color::WHITE, Color::BLACK));
        assert_eq!(line.sample_color(-30.0), line.get_color(0));
        assert_eq!(line.sample_color(500.0), line.get_color(9));
        assert_eq!(line.sample_color(f32::NAN), line.get_color(0));
        assert_eq!(line.sample_color(f32::INFINITY), line.get_color(0));
    }

    #[test]
    fn repeating_tile_starts_at_first_stop() {
        let stops = vec![ColorStop::new(Color::RED, 0.25), ColorStop::new(Color::BLUE, 0.75)];
        let line = GradientLine::with_layout(50, 100, 25, true, &stops);
        assert_eq!(line.get_color(0), Color::RED);
        assert_eq!(line.sample_color(25.0), Color::RED);
        assert_eq!(line.sample_color(75.0), Color::RED);
        assert_eq!(line.sample_color(50.0), line.get_color(25));
    }

    #[test]
    fn repeating_sampling_is_periodic() {
        let stops = vec![
            ColorStop::new(Color::RED, 0.1),
            ColorStop::new(Color::from_rgba(0, 255, 0, 128), 0.3),
            ColorStop::new(Color::BLUE, 0.4),
        ];
        let line = GradientLine::with_layout(30, 100, 10, true, &stops);
        let period = line.color_count() as f32;
        for loc in [0.0, 3.25, 17.5, 29.75] {
            for k in -3..=3 {
                let shifted = loc + k as f32 * period;
                assert_eq!(line.sample_color(loc), line.sample_color(shifted), "loc = {loc}, k = {k}");
            }
        }
    }
}
