//! Plot rectangle with inset margins.
//!
//! All slice geometry and document points must stay inside the drawable
//! region, which is the outer rectangle inset by the margins.

use serde::{Deserialize, Serialize};

/// Inset margins for a plot rectangle (pixels).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Margins {
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Left inset.
    pub left: f32,
}

impl Margins {
    /// Create margins with individual insets.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Zero margins on all sides.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Uniform margin on all sides.
    pub fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

impl Default for Margins {
    fn default() -> Self {
        // Leaves room for slice labels along every edge
        Self::uniform(30.0)
    }
}

/// Plot rectangle: outer size plus inset margins.
///
/// Screen convention: x grows right, y grows down, (0, 0) at the top-left
/// corner of the outer rectangle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlotRect {
    /// Outer width in pixels.
    pub width: f32,
    /// Outer height in pixels.
    pub height: f32,
    /// Inset margins.
    pub margins: Margins,
}

impl PlotRect {
    /// Create a rectangle with the given outer size and margins.
    pub fn new(width: f32, height: f32, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// X coordinate of the drawable region's left edge.
    #[inline]
    pub fn left(&self) -> f32 {
        self.margins.left
    }

    /// X coordinate of the drawable region's right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.width - self.margins.right
    }

    /// Y coordinate of the drawable region's top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.margins.top
    }

    /// Y coordinate of the drawable region's bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height - self.margins.bottom
    }

    /// Width of the drawable region.
    #[inline]
    pub fn inner_width(&self) -> f32 {
        self.right() - self.left()
    }

    /// Height of the drawable region.
    #[inline]
    pub fn inner_height(&self) -> f32 {
        self.bottom() - self.top()
    }
}

impl Default for PlotRect {
    fn default() -> Self {
        Self::new(800.0, 700.0, Margins::default())
    }
}
