//! Projection of topic-weight vectors onto the plot plane.
//!
//! A document's plotted position is the weighted sum of the basis vectors:
//! `point = Σ weight[i] * basis[i]` over topics with positive weight. The
//! per-topic terms are retained as the document's contribution list so the
//! fingerprint renderer can decompose the point without recomputing.

use serde::{Deserialize, Serialize};

use crate::basis::RotationBasis;
use crate::core::Vec2;
use crate::error::LayoutError;

/// A document's projected position and its per-topic decomposition.
///
/// Coordinates are in data space; the layout pass maps them to screen
/// space through its scales.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentPlacement {
    /// Sum of all contributions (the zero point for an all-zero vector).
    pub point: Vec2,
    /// Per-topic contribution `weight[i] * basis[i]`, only for topics with
    /// positive weight, in increasing topic-index order.
    pub contributions: Vec<TopicContribution>,
}

/// One topic's share of a document's projected point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TopicContribution {
    /// Topic index into the basis.
    pub topic: usize,
    /// Raw weight for this topic (positive).
    pub weight: f32,
    /// `weight * basis[topic]` in data space.
    pub offset: Vec2,
}

/// Project a weight vector through the basis.
///
/// Summation runs in increasing topic-index order so the floating-point
/// result is reproducible across platforms. Zero-weight topics contribute
/// nothing and are omitted from the contribution list; an all-zero vector
/// projects exactly to the zero point with no division anywhere.
///
/// Rejects a weight vector whose length differs from the topic count.
pub fn project(
    weights: &[f32],
    basis: &RotationBasis,
) -> Result<DocumentPlacement, LayoutError> {
    if weights.len() != basis.len() {
        return Err(LayoutError::WeightLengthMismatch {
            expected: basis.len(),
            actual: weights.len(),
        });
    }

    let mut point = Vec2::ZERO;
    let mut contributions = Vec::new();
    for (topic, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        let offset = basis.vector(topic) * weight;
        point = point + offset;
        contributions.push(TopicContribution {
            topic,
            weight,
            offset,
        });
    }

    Ok(DocumentPlacement {
        point,
        contributions,
    })
}
