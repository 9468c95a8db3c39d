//! Coordinate and geometry types shared by the gradient pipeline.
//!
//! Canonical pixel space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! Integer types address pixels; float types carry sub-pixel positions
//! (gradient start points, conic centers).

mod point;
mod rect;
mod size;
mod vec2;

pub use point::IntPoint;
pub use rect::IntRect;
pub use size::{IntSize, Size};
pub use vec2::Vec2;
