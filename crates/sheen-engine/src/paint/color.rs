use bytemuck::{Pod, Zeroable};

/// Straight-alpha 8-bit RGBA color.
///
/// Layout is `r, g, b, a` bytes, so a slice of colors can be viewed as an
/// RGBA8 image buffer without copying (see [`Pixmap::as_bytes`](super::Pixmap::as_bytes)).
///
/// Mixing is premultiplied-alpha aware: when the two alphas differ the channels
/// are weighted by alpha before interpolation, which avoids dark fringes when
/// fading into transparent stops.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::from_rgba(self.r, self.g, self.b, a)
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Interpolates towards `other` by `weight` (`0` = `self`, `1` = `other`).
    ///
    /// Equal alphas (or equal RGB) take the cheap straight path; otherwise the
    /// mix happens in premultiplied space and is divided back by the mixed alpha.
    pub fn mixed_with(self, other: Color, weight: f32) -> Color {
        if self.a == other.a || self.with_alpha(0) == other.with_alpha(0) {
            return Color::from_rgba(
                round_to_u8(mix(self.r as f32, other.r as f32, weight)),
                round_to_u8(mix(self.g as f32, other.g as f32, weight)),
                round_to_u8(mix(self.b as f32, other.b as f32, weight)),
                round_to_u8(mix(self.a as f32, other.a as f32, weight)),
            );
        }

        let mixed_alpha = mix(self.a as f32, other.a as f32, weight);
        if mixed_alpha <= 0.0 {
            return Color::TRANSPARENT;
        }

        let (a0, a1) = (self.a as f32, other.a as f32);
        let channel = |c0: u8, c1: u8| {
            round_to_u8(mix(c0 as f32 * a0, c1 as f32 * a1, weight) / mixed_alpha)
        };

        Color::from_rgba(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            round_to_u8(mixed_alpha),
        )
    }

    /// Composites `source` over `self` (source-over, straight alpha).
    pub fn blend(self, source: Color) -> Color {
        if self.a == 0 || source.a == 255 {
            return source;
        }
        if source.a == 0 {
            return self;
        }

        let (da, sa) = (self.a as u32, source.a as u32);
        let d = 255 * (da + sa) - da * sa;
        let channel = |dc: u8, sc: u8| {
            ((dc as u32 * da * (255 - sa) + sc as u32 * 255 * sa) / d) as u8
        };

        Color::from_rgba(
            channel(self.r, source.r),
            channel(self.g, source.g),
            channel(self.b, source.b),
            (d / 255) as u8,
        )
    }
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// `as` saturates and maps NaN to 0.
#[inline]
fn round_to_u8(v: f32) -> u8 {
    v.round() as u8
}
