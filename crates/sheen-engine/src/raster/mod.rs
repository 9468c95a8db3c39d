//! CPU rasterization of resolved gradients.
//!
//! Each call builds its own [`GradientLine`](crate::gradient::GradientLine),
//! walks the destination rectangle and writes through a [`Painter`]. No state
//! survives the call, so gradients can be rasterized from several threads
//! as long as each one has its own painter (or disjoint pixels).

mod conic;
mod linear;

pub use conic::paint_conic_gradient;
pub use linear::paint_linear_gradient;

use crate::coords::IntRect;
use crate::gradient::{resolve_conic_gradient_data, resolve_linear_gradient_data};
use crate::paint::Painter;
use crate::style::{ConicGradientStyle, LinearGradientStyle};

/// Resolves `style` for `gradient_rect` and paints it.
pub fn fill_linear_gradient<P: Painter + ?Sized>(
    painter: &mut P,
    gradient_rect: IntRect,
    style: &LinearGradientStyle,
) {
    let data = resolve_linear_gradient_data(gradient_rect.size.into(), style);
    paint_linear_gradient(painter, gradient_rect, &data);
}

/// Resolves `style` (stops and center) for `gradient_rect` and paints it.
pub fn fill_conic_gradient<P: Painter + ?Sized>(
    painter: &mut P,
    gradient_rect: IntRect,
    style: &ConicGradientStyle,
) {
    let data = resolve_conic_gradient_data(style);
    let center = style.resolve_center(gradient_rect.size);
    paint_conic_gradient(painter, gradient_rect, &data, center);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, Pixmap};
    use crate::style::{ColorStopListElement, GradientDirection, LengthPercentage, SideOrCorner};

    #[test]
    fn fill_linear_matches_two_step_pipeline() {
        let style = LinearGradientStyle::new(
            GradientDirection::SideOrCorner(SideOrCorner::Right),
            vec![
                ColorStopListElement::new(Color::RED),
                ColorStopListElement::new(Color::BLUE).at(LengthPercentage::Percent(50.0)),
            ],
        );
        let rect = IntRect::new(0, 0, 32, 8);

        let mut direct = Pixmap::new(32, 8);
        fill_linear_gradient(&mut direct, rect, &style);

        let mut staged = Pixmap::new(32, 8);
        let data = resolve_linear_gradient_data(rect.size.into(), &style);
        paint_linear_gradient(&mut staged, rect, &data);

        assert_eq!(direct, staged);
        assert_eq!(direct.pixel(31, 4), Some(Color::BLUE));
    }

    #[test]
    fn fill_conic_uses_style_center() {
        let style = ConicGradientStyle::new(vec![
            ColorStopListElement::new(Color::RED),
            ColorStopListElement::new(Color::BLUE),
        ])
        .at(LengthPercentage::Px(0.0), LengthPercentage::Px(0.0));
        let mut pixmap = Pixmap::new(20, 20);
        let rect = pixmap.rect();
        fill_conic_gradient(&mut pixmap, rect, &style);
        // Below-right of a top-left center: atan2(8.5, 18.5) is ~24.7deg past "right" (90deg).
        let c = pixmap.pixel(19, 9).unwrap();
        assert_eq!(c, Color::RED.mixed_with(Color::BLUE, 114.0 / 360.0));
    }
}
