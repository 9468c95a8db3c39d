//! Gradient resolution: from authored stop lists to a sampled color line.
//!
//! Pipeline (leaves first):
//! - `geometry`: CSS angle → radians, gradient axis length for a box
//! - `stops`: stop-list normalization and the per-segment blend weight
//! - `data`: per-kind resolution (linear / conic) on top of `stops`
//! - `line`: the precomputed, unit-resolution color line sampled by rasterizers
//!
//! Everything here is rebuilt per paint and never mutated afterwards.

mod data;
mod geometry;
mod line;
mod stops;

pub use data::{
    ConicGradientData, LinearGradientData, resolve_conic_gradient_data,
    resolve_linear_gradient_data,
};
pub use geometry::{gradient_length, gradient_length_for_angle, normalized_gradient_angle_radians};
pub use line::GradientLine;
pub use stops::{ColorStop, ColorStopList, color_stop_step, resolve_color_stop_positions};
