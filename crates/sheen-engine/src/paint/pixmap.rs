use crate::coords::{IntPoint, IntRect, IntSize};

use super::{Color, Painter};

/// Owned RGBA8 pixel buffer, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    size: IntSize,
    pixels: Vec<Color>,
}

impl Pixmap {
    /// Creates a transparent pixmap. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let size = IntSize::new(width.max(0), height.max(0));
        let len = size.width as usize * size.height as usize;
        Self { size, pixels: vec![Color::TRANSPARENT; len] }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    #[inline]
    pub fn size(&self) -> IntSize {
        self.size
    }

    #[inline]
    pub fn rect(&self) -> IntRect {
        IntRect::from_origin_size(IntPoint::new(0, 0), self.size)
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, suitable for image encoders.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.rect().contains(IntPoint::new(x, y)) {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl Painter for Pixmap {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color, blend: bool) {
        let Some(i) = self.index_of(x, y) else { return };
        let dst = &mut self.pixels[i];
        *dst = if blend { dst.blend(color) } else { color };
    }
}
