//! Per-document fingerprint rendering.
//!
//! A fingerprint decomposes one document's plotted point into its topic
//! contributions: for each active topic a filled triangle (origin,
//! contribution point, document point) plus the two legs connecting the
//! contribution point to the origin and to the document point. Triangle
//! fills are the topic color washed toward white by the weight normalized
//! against the pass-wide maximum; primitives are emitted in ascending
//! weight order so the most saturated triangles draw last, on top.

use serde::{Deserialize, Serialize};

use crate::core::{Rgb, Segment, Vec2};
use crate::layout::LayoutContext;
use crate::projection::DocumentPlacement;

/// A filled triangle keyed for later removal by the rendering surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FingerprintTriangle {
    /// Removal key, unique per document/topic pair.
    pub key: String,
    /// Topic index.
    pub topic: usize,
    /// Raw topic weight (drives draw order).
    pub weight: f32,
    /// Origin, contribution point, document point.
    pub points: [Vec2; 3],
    /// Fill color: topic color blended from white by normalized intensity.
    pub fill: Rgb,
}

/// A stroked line segment keyed for later removal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FingerprintSegment {
    /// Removal key, unique per document/topic/leg triple.
    pub key: String,
    /// Topic index.
    pub topic: usize,
    /// Segment endpoints.
    pub segment: Segment,
    /// Stroke color (the topic's base color).
    pub stroke: Rgb,
    /// Stroke opacity in [0, 1] (the normalized intensity).
    pub opacity: f32,
}

/// All primitives for one document's fingerprint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Document this fingerprint belongs to.
    pub doc_id: String,
    /// One triangle per active topic, ascending raw weight.
    pub triangles: Vec<FingerprintTriangle>,
    /// Two segments per active topic, ascending raw weight.
    pub segments: Vec<FingerprintSegment>,
}

/// Render a document's fingerprint.
///
/// `colors` assigns a base color per topic index; `ctx` supplies the
/// screen origin, the scales mapping data-space contributions to screen
/// points, and the pass-wide maximum weight the intensity normalizes
/// against. A zero maximum (no document has any weight) renders every
/// intensity as zero rather than dividing by zero.
pub fn render(
    doc_id: &str,
    placement: &DocumentPlacement,
    ctx: &LayoutContext,
    colors: &[Rgb],
) -> Fingerprint {
    let origin = ctx.origin;
    let doc_point = ctx.to_screen(placement.point);

    // Ascending weight so saturated triangles draw last
    let mut ordered: Vec<_> = placement.contributions.iter().collect();
    ordered.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut triangles = Vec::with_capacity(ordered.len());
    let mut segments = Vec::with_capacity(ordered.len() * 2);
    for contribution in ordered {
        let topic = contribution.topic;
        let base = if colors.is_empty() {
            Rgb::for_topic(topic)
        } else {
            colors[topic % colors.len()]
        };
        let intensity = if ctx.max_weight > 0.0 {
            contribution.weight / ctx.max_weight
        } else {
            0.0
        };
        let contribution_point = ctx.to_screen(contribution.offset);

        triangles.push(FingerprintTriangle {
            key: format!("fp-{}-{}-tri", doc_id, topic),
            topic,
            weight: contribution.weight,
            points: [origin, contribution_point, doc_point],
            fill: base.blend_from_white(intensity),
        });
        segments.push(FingerprintSegment {
            key: format!("fp-{}-{}-origin", doc_id, topic),
            topic,
            segment: Segment::new(origin, contribution_point),
            stroke: base,
            opacity: intensity,
        });
        segments.push(FingerprintSegment {
            key: format!("fp-{}-{}-doc", doc_id, topic),
            topic,
            segment: Segment::new(doc_point, contribution_point),
            stroke: base,
            opacity: intensity,
        });
    }

    Fingerprint {
        doc_id: doc_id.to_string(),
        triangles,
        segments,
    }
}

/// Retained fingerprint selection state.
///
/// The rendering surface keeps one overlay; selecting a document fully
/// replaces the previous primitive set (clear before draw), so repeated
/// selection of the same document is idempotent and primitives never
/// accumulate across selections.
#[derive(Clone, Debug, Default)]
pub struct FingerprintOverlay {
    current: Option<Fingerprint>,
}

impl FingerprintOverlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed fingerprint.
    pub fn select(&mut self, fingerprint: Fingerprint) -> &Fingerprint {
        self.current = Some(fingerprint);
        self.current.as_ref().unwrap()
    }

    /// Remove the displayed fingerprint, if any.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Currently displayed fingerprint.
    pub fn current(&self) -> Option<&Fingerprint> {
        self.current.as_ref()
    }
}
