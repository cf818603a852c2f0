//! Rotational projection basis.
//!
//! Each of the K topics gets a unit vector on the unit circle. Slice
//! *dividers* sit at multiples of the slice angle (2π/K); each topic's
//! basis vector bisects its slice, half a slice angle past its divider.
//! Swapping that offset would misalign rendered boundaries with the topic
//! regions they delimit, so both quantities live here.

use crate::core::math::TWO_PI;
use crate::core::Vec2;
use crate::error::LayoutError;

/// Unit basis vectors for K topics, one per slice bisector.
#[derive(Clone, Debug)]
pub struct RotationBasis {
    vectors: Vec<Vec2>,
    slice_angle: f32,
}

impl RotationBasis {
    /// Build the basis for `num_topics` topics.
    ///
    /// Basis vector `i` points at angle `(i + 0.5) * (2π / K)`.
    /// Rejects a zero topic count.
    pub fn new(num_topics: usize) -> Result<Self, LayoutError> {
        if num_topics == 0 {
            return Err(LayoutError::InvalidTopicCount(num_topics));
        }
        let slice_angle = TWO_PI / num_topics as f32;
        let vectors = (0..num_topics)
            .map(|i| Vec2::from_angle((i as f32 + 0.5) * slice_angle))
            .collect();
        Ok(Self {
            vectors,
            slice_angle,
        })
    }

    /// Number of topics (K).
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True only for the degenerate single-topic basis.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.vectors.len() == 1
    }

    /// Angular width of one slice (2π / K).
    #[inline]
    pub fn slice_angle(&self) -> f32 {
        self.slice_angle
    }

    /// Unit vector for topic `i`.
    #[inline]
    pub fn vector(&self, i: usize) -> Vec2 {
        self.vectors[i]
    }

    /// All basis vectors in topic order.
    #[inline]
    pub fn vectors(&self) -> &[Vec2] {
        &self.vectors
    }

    /// Divider angle for slice `k`: `k * (2π / K)`, strictly increasing
    /// over [0, 2π).
    #[inline]
    pub fn divider_angle(&self, k: usize) -> f32 {
        k as f32 * self.slice_angle
    }

    /// Bisecting angle of slice `k` (where its label anchors).
    #[inline]
    pub fn bisector_angle(&self, k: usize) -> f32 {
        self.divider_angle(k) + self.slice_angle * 0.5
    }

    /// All divider angles in ascending order.
    pub fn divider_angles(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.vectors.len()).map(|k| self.divider_angle(k))
    }
}
