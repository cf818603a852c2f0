//! Per-pass layout orchestration.
//!
//! A layout pass is a single synchronous pipeline, rerun from scratch
//! whenever the topic count, rectangle, or score distribution changes:
//!
//! ```text
//!  weight vectors ──► RotationBasis ──► data-space placements
//!                                            │
//!                          extents + scales (origin always in-domain)
//!                                            │
//!                     screen placements, slice dividers, label anchors
//! ```
//!
//! All derived state for a pass lives in an immutable [`LayoutContext`]
//! built fresh each run and carried inside the returned [`LayoutPass`];
//! nothing is shared or mutated across passes, so a placement can never be
//! observed against a stale basis.

use std::collections::BTreeMap;

use crate::basis::RotationBasis;
use crate::config::LayoutConfig;
use crate::core::{LinearScale, PlotRect, Rgb, Vec2};
use crate::error::LayoutError;
use crate::fingerprint::{self, Fingerprint};
use crate::projection::{self, DocumentPlacement};
use crate::slices::{self, SliceGeometry};

/// One document as supplied by the modeling collaborator.
#[derive(Clone, Debug)]
pub struct Document {
    /// Stable identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Ordered topic weights, one entry per topic.
    pub weights: Vec<f32>,
}

impl Document {
    /// Create a document record.
    pub fn new(id: impl Into<String>, label: impl Into<String>, weights: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weights,
        }
    }
}

/// Immutable per-pass geometry: basis, scales, origin, and the pass-wide
/// weight maximum used for fingerprint intensity.
#[derive(Clone, Debug)]
pub struct LayoutContext {
    /// Projection basis for this pass.
    pub basis: RotationBasis,
    /// Plot rectangle the pass was laid out against.
    pub rect: PlotRect,
    /// Data-x to screen-x scale.
    pub x_scale: LinearScale,
    /// Data-y to screen-y scale (inverted range: data up is screen up).
    pub y_scale: LinearScale,
    /// Screen position of the data-space zero point.
    pub origin: Vec2,
    /// Maximum topic weight across all documents this pass.
    pub max_weight: f32,
}

impl LayoutContext {
    /// Map a data-space point to screen coordinates.
    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.x_scale.map(p.x), self.y_scale.map(p.y))
    }
}

/// One document's placement within a finished pass.
#[derive(Clone, Debug)]
pub struct PlacedDocument {
    /// Display label.
    pub label: String,
    /// Screen position of the document's point.
    pub point: Vec2,
    /// Data-space placement with the per-topic decomposition.
    pub placement: DocumentPlacement,
}

/// Result of a full layout pass.
#[derive(Clone, Debug)]
pub struct LayoutPass {
    /// The geometry this pass was computed against.
    pub context: LayoutContext,
    /// Placements keyed by document id, iterated in id order.
    pub documents: BTreeMap<String, PlacedDocument>,
    /// Slice dividers and label anchors.
    pub slices: SliceGeometry,
}

impl LayoutPass {
    /// Render the fingerprint for one document.
    ///
    /// `colors` assigns a base color per topic index. Returns `None` for
    /// an unknown document id.
    pub fn fingerprint(&self, doc_id: &str, colors: &[Rgb]) -> Option<Fingerprint> {
        let placed = self.documents.get(doc_id)?;
        Some(fingerprint::render(
            doc_id,
            &placed.placement,
            &self.context,
            colors,
        ))
    }
}

/// Runs layout passes.
pub struct LayoutEngine;

impl LayoutEngine {
    /// Run one full layout pass over the corpus.
    ///
    /// Validates the configuration, projects every document, builds the
    /// scales (falling back to a fixed extent when every document projects
    /// to the same point), and computes the slice geometry. The data-space
    /// origin is always included in the scale domains so the screen origin
    /// stays inside the drawable rectangle.
    pub fn run_pass(
        config: &LayoutConfig,
        documents: &[Document],
    ) -> Result<LayoutPass, LayoutError> {
        config.validate()?;
        let basis = RotationBasis::new(config.num_topics)?;

        // Project all documents in data space
        let mut placements = Vec::with_capacity(documents.len());
        let mut max_weight: f32 = 0.0;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (0.0f32, 0.0f32, 0.0f32, 0.0f32);
        for doc in documents {
            let placement = projection::project(&doc.weights, &basis)?;
            min_x = min_x.min(placement.point.x);
            max_x = max_x.max(placement.point.x);
            min_y = min_y.min(placement.point.y);
            max_y = max_y.max(placement.point.y);
            for contribution in &placement.contributions {
                max_weight = max_weight.max(contribution.weight);
            }
            placements.push(placement);
        }

        let rect = config.rect;
        let x_scale = LinearScale::guarded(
            (min_x, max_x),
            (rect.left(), rect.right()),
            config.fallback_half_extent,
        );
        let y_scale = LinearScale::guarded(
            (min_y, max_y),
            (rect.bottom(), rect.top()),
            config.fallback_half_extent,
        );
        let origin = Vec2::new(x_scale.map(0.0), y_scale.map(0.0));

        let context = LayoutContext {
            basis,
            rect,
            x_scale,
            y_scale,
            origin,
            max_weight,
        };

        let mut placed = BTreeMap::new();
        for (doc, placement) in documents.iter().zip(placements) {
            let point = context.to_screen(placement.point);
            placed.insert(
                doc.id.clone(),
                PlacedDocument {
                    label: doc.label.clone(),
                    point,
                    placement,
                },
            );
        }

        let slices = slices::slice_geometry(
            origin,
            &rect,
            &context.basis,
            config.label_radius_ratio,
        );

        log::debug!(
            "layout pass: {} topics, {} documents, origin ({:.1}, {:.1}), max weight {:.2}",
            context.basis.len(),
            placed.len(),
            origin.x,
            origin.y,
            max_weight
        );

        Ok(LayoutPass {
            context,
            documents: placed,
            slices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Margins;
    use approx::assert_relative_eq;

    fn symmetric_corpus() -> Vec<Document> {
        vec![
            Document::new("d0", "East", vec![1.0, 0.0, 0.0, 0.0]),
            Document::new("d1", "North", vec![0.0, 1.0, 0.0, 0.0]),
            Document::new("d2", "West", vec![0.0, 0.0, 1.0, 0.0]),
            Document::new("d3", "South", vec![0.0, 0.0, 0.0, 1.0]),
        ]
    }

    #[test]
    fn test_symmetric_corpus_centers_origin() {
        let config = LayoutConfig::for_plot(4, 800.0, 700.0);
        let pass = LayoutEngine::run_pass(&config, &symmetric_corpus()).unwrap();

        assert_relative_eq!(pass.context.origin.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(pass.context.origin.y, 350.0, epsilon = 1e-3);

        // With the origin centered, the four dividers exit at the edge
        // midpoints of the 800x700 rectangle
        let expected = [
            Vec2::new(800.0, 350.0),
            Vec2::new(400.0, 0.0),
            Vec2::new(0.0, 350.0),
            Vec2::new(400.0, 700.0),
        ];
        assert_eq!(pass.slices.dividers.len(), 4);
        for (divider, want) in pass.slices.dividers.iter().zip(expected) {
            assert_relative_eq!(divider.segment.end.x, want.x, epsilon = 1e-2);
            assert_relative_eq!(divider.segment.end.y, want.y, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_documents_inside_rect() {
        let config = LayoutConfig {
            num_topics: 4,
            rect: PlotRect::new(800.0, 700.0, Margins::uniform(40.0)),
            ..LayoutConfig::default()
        };
        let pass = LayoutEngine::run_pass(&config, &symmetric_corpus()).unwrap();

        for placed in pass.documents.values() {
            assert!(placed.point.x >= config.rect.left() - 1e-3);
            assert!(placed.point.x <= config.rect.right() + 1e-3);
            assert!(placed.point.y >= config.rect.top() - 1e-3);
            assert!(placed.point.y <= config.rect.bottom() + 1e-3);
        }
    }

    #[test]
    fn test_zero_vector_maps_to_origin() {
        let config = LayoutConfig::for_plot(4, 800.0, 700.0);
        let mut docs = symmetric_corpus();
        docs.push(Document::new("zero", "Zero", vec![0.0; 4]));
        let pass = LayoutEngine::run_pass(&config, &docs).unwrap();

        let zero = &pass.documents["zero"];
        assert_relative_eq!(zero.point.x, pass.context.origin.x, epsilon = 1e-4);
        assert_relative_eq!(zero.point.y, pass.context.origin.y, epsilon = 1e-4);
    }

    #[test]
    fn test_identical_documents_fall_back_to_fixed_extent() {
        // Every document projects to the same point: scales must fall back
        // instead of dividing by zero
        let config = LayoutConfig::for_plot(3, 600.0, 600.0);
        let docs = vec![
            Document::new("a", "A", vec![1.0, 1.0, 1.0]),
            Document::new("b", "B", vec![1.0, 1.0, 1.0]),
        ];
        let pass = LayoutEngine::run_pass(&config, &docs).unwrap();

        for placed in pass.documents.values() {
            assert!(placed.point.x.is_finite());
            assert!(placed.point.y.is_finite());
        }
        assert!(pass.context.origin.x.is_finite());
    }

    #[test]
    fn test_empty_corpus() {
        let config = LayoutConfig::for_plot(4, 800.0, 700.0);
        let pass = LayoutEngine::run_pass(&config, &[]).unwrap();
        assert!(pass.documents.is_empty());
        assert_eq!(pass.slices.dividers.len(), 4);
        assert_eq!(pass.context.max_weight, 0.0);
    }

    #[test]
    fn test_mismatched_weights_rejected() {
        let config = LayoutConfig::for_plot(4, 800.0, 700.0);
        let docs = vec![Document::new("bad", "Bad", vec![1.0, 2.0])];
        let err = LayoutEngine::run_pass(&config, &docs).unwrap_err();
        assert_eq!(
            err,
            LayoutError::WeightLengthMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected_before_projection() {
        let config = LayoutConfig::for_plot(0, 800.0, 700.0);
        let err = LayoutEngine::run_pass(&config, &symmetric_corpus()).unwrap_err();
        assert_eq!(err, LayoutError::InvalidTopicCount(0));
    }

    #[test]
    fn test_pass_recomputes_from_scratch() {
        let config = LayoutConfig::for_plot(4, 800.0, 700.0);
        let docs = symmetric_corpus();
        let first = LayoutEngine::run_pass(&config, &docs).unwrap();
        let second = LayoutEngine::run_pass(&config, &docs).unwrap();

        // Deterministic: identical inputs give identical geometry
        for (a, b) in first.documents.values().zip(second.documents.values()) {
            assert_eq!(a.point, b.point);
        }
        assert_eq!(first.context.origin, second.context.origin);
    }

    #[test]
    fn test_max_weight_spans_all_documents() {
        let config = LayoutConfig::for_plot(4, 800.0, 700.0);
        let docs = vec![
            Document::new("a", "A", vec![1.0, 0.0, 0.0, 0.0]),
            Document::new("b", "B", vec![0.0, 7.0, 0.0, 2.0]),
        ];
        let pass = LayoutEngine::run_pass(&config, &docs).unwrap();
        assert_relative_eq!(pass.context.max_weight, 7.0, epsilon = 1e-6);
    }
}
