use super::{IntPoint, IntSize};

/// Axis-aligned pixel rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub origin: IntPoint,
    pub size: IntSize,
}

impl IntRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: IntPoint::new(x, y),
            size: IntSize::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: IntPoint, size: IntSize) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.size.width
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.size.height
    }

    #[inline]
    pub fn max(self) -> IntPoint {
        IntPoint::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Returns the rectangle moved by `(dx, dy)`; size is unchanged.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::from_origin_size(self.origin.translated(dx, dy), self.size)
    }

    /// Integer center point. Odd sizes round toward the origin.
    #[inline]
    pub const fn center(self) -> IntPoint {
        IntPoint::new(
            self.origin.x + self.size.width / 2,
            self.origin.y + self.size.height / 2,
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: IntPoint) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }
}
