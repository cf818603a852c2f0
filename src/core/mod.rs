//! Core types for the chakra-plot geometry engine.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Vec2`] and [`Segment`]: 2D vector and line segment
//! - [`PlotRect`] and [`Margins`]: the drawable rectangle
//! - [`LinearScale`]: data-to-screen mapping with degenerate-extent fallback
//! - [`Rgb`]: topic colors and intensity blending

mod color;
mod point;
mod rect;
mod scale;

pub mod math;

pub use color::{Rgb, PALETTE};
pub use point::{Segment, Vec2};
pub use rect::{Margins, PlotRect};
pub use scale::LinearScale;
