use super::Color;

/// Pixel sink that gradient rasterizers write through.
///
/// Implementations own clipping: writes outside the target must be ignored,
/// never panic. When `blend` is true the color is composited source-over onto
/// the existing pixel; otherwise it replaces it.
///
/// Rasterizing two gradients in parallel only requires that each call gets
/// its own `&mut` painter (or disjoint regions of a shared one).
pub trait Painter {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color, blend: bool);
}

impl<P: Painter + ?Sized> Painter for &mut P {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color, blend: bool) {
        (**self).set_pixel(x, y, color, blend);
    }
}
