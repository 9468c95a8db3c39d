/// Size in (possibly fractional) pixels, as produced by layout.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rounds both dimensions to the nearest whole pixel.
    #[inline]
    pub fn to_rounded(self) -> IntSize {
        IntSize::new(self.width.round() as i32, self.height.round() as i32)
    }
}

/// Size in whole pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<IntSize> for Size {
    #[inline]
    fn from(s: IntSize) -> Self {
        Size::new(s.width as f32, s.height as f32)
    }
}
