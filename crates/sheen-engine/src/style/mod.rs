//! Gradient style values as handed over by the style/layout layer.
//!
//! These are already-parsed values: stop lists with optional positions in
//! their external units, a direction or start angle, and a spread mode.
//! Nothing here resolves positions; see [`crate::gradient`].

mod gradient;
mod units;

pub use gradient::{
    ColorStopListElement, ConicGradientStyle, GradientDirection, LinearGradientStyle,
    SideOrCorner,
};
pub use units::{Angle, AnglePercentage, LengthPercentage};
