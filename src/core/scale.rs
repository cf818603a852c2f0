//! Linear data-to-screen scales.
//!
//! A [`LinearScale`] maps a data-space interval onto a pixel interval.
//! The y scale is typically built with an inverted range (bottom, top) so
//! that data-space "up" renders upward on a y-down screen.

use serde::{Deserialize, Serialize};

/// Width below which a domain is considered degenerate.
const DEGENERATE_EPS: f32 = 1e-6;

/// A linear mapping from a data domain to a pixel range.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LinearScale {
    /// Data-space interval (start, end).
    pub domain: (f32, f32),
    /// Pixel interval (start, end). May be inverted (start > end).
    pub range: (f32, f32),
}

impl LinearScale {
    /// Create a scale from domain to range.
    ///
    /// The domain must have nonzero width; use [`LinearScale::guarded`]
    /// when the domain comes from a data extent that may collapse.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Create a scale, widening a degenerate domain to a fixed extent.
    ///
    /// When all data points share the same coordinate the extent collapses
    /// to a single value; the domain is replaced by
    /// `(v - half_extent, v + half_extent)` so mapping never divides by zero.
    pub fn guarded(domain: (f32, f32), range: (f32, f32), half_extent: f32) -> Self {
        let (d0, d1) = domain;
        if (d1 - d0).abs() < DEGENERATE_EPS {
            let mid = (d0 + d1) * 0.5;
            Self::new((mid - half_extent, mid + half_extent), range)
        } else {
            Self::new(domain, range)
        }
    }

    /// Map a data value to a pixel value.
    #[inline]
    pub fn map(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (value - d0) / (d1 - d0);
        r0 + (r1 - r0) * t
    }
}
