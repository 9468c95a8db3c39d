//! Paint model: colors and pixel targets.
//!
//! Scope:
//! - color representation (straight 8-bit RGBA, premultiplied-aware mixing)
//! - the [`Painter`] seam gradients are written through
//! - an in-memory [`Pixmap`] target
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod painter;
pub mod pixmap;

pub use color::Color;
pub use painter::Painter;
pub use pixmap::Pixmap;

/// Gradient spread behavior outside the span of its color stops.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Tile the stop span along the gradient axis.
    Repeat,
}

impl SpreadMode {
    #[inline]
    pub const fn is_repeating(self) -> bool {
        matches!(self, SpreadMode::Repeat)
    }
}
