//! Drawing definitions for report card primitives.
//!
//! These are plain value types describing *how* something is painted. The
//! drawing context that consumes them lives in the `mingpan` crate.
//!
//! - [`FontDefinition`], [`FontWeight`], [`TextAlign`], [`TextBaseline`] - typography
//! - [`StrokeDefinition`] - outline color and width
//! - [`Shadow`] - drop shadow applied behind filled and stroked rectangles

mod shadow;
mod stroke;
mod text;

pub use shadow::Shadow;
pub use stroke::StrokeDefinition;
pub use text::{FontDefinition, FontWeight, TextAlign, TextBaseline};
