//! Sheen engine crate.
//!
//! Resolves CSS-style gradient descriptions (color stops, hints, angles) into
//! a sampled color line and rasterizes linear and conic gradients onto a
//! pixel target on the CPU.
//!
//! ```
//! use sheen_engine::coords::IntRect;
//! use sheen_engine::paint::{Color, Pixmap};
//! use sheen_engine::raster::fill_linear_gradient;
//! use sheen_engine::style::{ColorStopListElement, GradientDirection, LinearGradientStyle, SideOrCorner};
//!
//! let style = LinearGradientStyle::new(
//!     GradientDirection::SideOrCorner(SideOrCorner::Right),
//!     vec![ColorStopListElement::new(Color::RED), ColorStopListElement::new(Color::BLUE)],
//! );
//! let mut pixmap = Pixmap::new(64, 16);
//! fill_linear_gradient(&mut pixmap, IntRect::new(0, 0, 64, 16), &style);
//! assert_eq!(pixmap.pixel(0, 0), Some(Color::RED));
//! ```

pub mod coords;
pub mod gradient;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod style;
