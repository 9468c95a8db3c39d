use core::f32::consts::PI;

/// A length in pixels or a percentage of some reference length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LengthPercentage {
    Px(f32),
    /// Percentage in `0..=100` notation (`50.0` is half).
    Percent(f32),
}

impl LengthPercentage {
    /// Resolves to pixels against `reference_px`.
    #[inline]
    pub fn resolved(self, reference_px: f32) -> f32 {
        match self {
            LengthPercentage::Px(px) => px,
            LengthPercentage::Percent(pct) => reference_px * pct / 100.0,
        }
    }
}

/// An angle in one of the CSS angle units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Angle {
    Deg(f32),
    Rad(f32),
    Grad(f32),
    Turn(f32),
}

impl Angle {
    #[inline]
    pub fn to_degrees(self) -> f32 {
        match self {
            Angle::Deg(v) => v,
            Angle::Rad(v) => v * 180.0 / PI,
            Angle::Grad(v) => v * 0.9,
            Angle::Turn(v) => v * 360.0,
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::Deg(0.0)
    }
}

/// An angle or a percentage of a full turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnglePercentage {
    Angle(Angle),
    Percent(f32),
}

impl AnglePercentage {
    /// Resolves to degrees; percentages are taken of `full_turn_degrees`.
    #[inline]
    pub fn resolved_degrees(self, full_turn_degrees: f32) -> f32 {
        match self {
            AnglePercentage::Angle(angle) => angle.to_degrees(),
            AnglePercentage::Percent(pct) => full_turn_degrees * pct / 100.0,
        }
    }
}
