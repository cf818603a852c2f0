//! Slice divider geometry.
//!
//! For an origin anywhere strictly inside the drawable rectangle, each of
//! the K divider rays must be drawn out to the exact point where it leaves
//! the rectangle. The four corner bearings split the full sweep into eight
//! octants, each lying against exactly one edge; classifying a divider
//! angle into its octant picks the edge, and the tangent of the angle with
//! the perpendicular distance to that edge gives the exit point.
//!
//! Screen convention: y grows downward; angles are measured CCW from +X
//! with "up" positive, so a ray at angle θ travels along (cos θ, -sin θ).

use serde::{Deserialize, Serialize};

use crate::basis::RotationBasis;
use crate::core::math::{normalize_angle, TWO_PI};
use crate::core::{PlotRect, Segment, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};

/// Tolerance for recognizing an exactly axis-aligned ray.
const AXIS_EPS: f32 = 1e-5;

/// One edge of the drawable rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// x = rect.right()
    Right,
    /// y = rect.top()
    Top,
    /// x = rect.left()
    Left,
    /// y = rect.bottom()
    Bottom,
}

/// The eight angular regions around the origin, in ascending angle order.
///
/// Region boundaries are the four corner bearings interleaved with the
/// four axis directions; each region faces exactly one rectangle edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Octant {
    /// [0, top-right corner) — right edge, above the origin.
    RightUpper,
    /// [top-right corner, 90°) — top edge, right of the origin.
    TopRight,
    /// [90°, top-left corner) — top edge, left of the origin.
    TopLeft,
    /// [top-left corner, 180°) — left edge, above the origin.
    LeftUpper,
    /// [180°, bottom-left corner) — left edge, below the origin.
    LeftLower,
    /// [bottom-left corner, 270°) — bottom edge, left of the origin.
    BottomLeft,
    /// [270°, bottom-right corner) — bottom edge, right of the origin.
    BottomRight,
    /// [bottom-right corner, 360°) — right edge, below the origin.
    RightLower,
}

impl Octant {
    /// The rectangle edge a ray in this octant exits through.
    #[inline]
    pub fn edge(self) -> Edge {
        match self {
            Octant::RightUpper | Octant::RightLower => Edge::Right,
            Octant::TopRight | Octant::TopLeft => Edge::Top,
            Octant::LeftUpper | Octant::LeftLower => Edge::Left,
            Octant::BottomLeft | Octant::BottomRight => Edge::Bottom,
        }
    }

    /// Classify an angle (normalized to [0, 2π)) into its octant.
    pub fn classify(angle: f32, corners: &CornerAngles) -> Octant {
        let a = normalize_angle(angle);
        if a < corners.top_right {
            Octant::RightUpper
        } else if a < FRAC_PI_2 {
            Octant::TopRight
        } else if a < corners.top_left {
            Octant::TopLeft
        } else if a < PI {
            Octant::LeftUpper
        } else if a < corners.bottom_left {
            Octant::LeftLower
        } else if a < 1.5 * PI {
            Octant::BottomLeft
        } else if a < corners.bottom_right {
            Octant::BottomRight
        } else {
            Octant::RightLower
        }
    }
}

/// Bearings from the origin to the four rectangle corners.
///
/// Computed from the right-triangle offsets between the origin and each
/// edge; together with the axis directions these partition [0, 2π) into
/// the eight [`Octant`]s.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CornerAngles {
    /// Bearing to the top-right corner, in (0, π/2).
    pub top_right: f32,
    /// Bearing to the top-left corner, in (π/2, π).
    pub top_left: f32,
    /// Bearing to the bottom-left corner, in (π, 3π/2).
    pub bottom_left: f32,
    /// Bearing to the bottom-right corner, in (3π/2, 2π).
    pub bottom_right: f32,
}

impl CornerAngles {
    /// Compute the corner bearings for an origin inside `rect`.
    pub fn from_origin(origin: Vec2, rect: &PlotRect) -> Self {
        let dx_right = rect.right() - origin.x;
        let dx_left = origin.x - rect.left();
        let dy_top = origin.y - rect.top();
        let dy_bottom = rect.bottom() - origin.y;

        Self {
            top_right: (dy_top / dx_right).atan(),
            top_left: FRAC_PI_2 + (dy_top / dx_left).atan(),
            bottom_left: PI + (dy_bottom / dx_left).atan(),
            bottom_right: 1.5 * PI + (dy_bottom / dx_right).atan(),
        }
    }
}

/// Exit point of a ray from `origin` at `angle` through the rectangle
/// boundary.
///
/// Exactly axis-aligned rays (0, π/2, π, 3π/2) are intersected directly
/// with their edge, never through the tangent, so an origin sitting on an
/// edge midline cannot produce an undefined denominator. For all other
/// angles the octant picks the edge; the coordinate along that edge comes
/// from the tangent and is clamped to the edge span, while the
/// perpendicular coordinate is pinned exactly to the edge position.
pub fn divider_exit(origin: Vec2, rect: &PlotRect, corners: &CornerAngles, angle: f32) -> Vec2 {
    let a = normalize_angle(angle);

    // Axis-aligned rays bypass the tangent entirely
    if a < AXIS_EPS || TWO_PI - a < AXIS_EPS {
        return Vec2::new(rect.right(), origin.y);
    }
    if (a - FRAC_PI_2).abs() < AXIS_EPS {
        return Vec2::new(origin.x, rect.top());
    }
    if (a - PI).abs() < AXIS_EPS {
        return Vec2::new(rect.left(), origin.y);
    }
    if (a - 1.5 * PI).abs() < AXIS_EPS {
        return Vec2::new(origin.x, rect.bottom());
    }

    let tan = a.tan();
    let dx_right = rect.right() - origin.x;
    let dx_left = origin.x - rect.left();
    let dy_top = origin.y - rect.top();
    let dy_bottom = rect.bottom() - origin.y;

    match Octant::classify(a, corners).edge() {
        Edge::Right => {
            let y = origin.y - dx_right * tan;
            Vec2::new(rect.right(), y.clamp(rect.top(), rect.bottom()))
        }
        Edge::Top => {
            let x = origin.x + dy_top / tan;
            Vec2::new(x.clamp(rect.left(), rect.right()), rect.top())
        }
        Edge::Left => {
            let y = origin.y + dx_left * tan;
            Vec2::new(rect.left(), y.clamp(rect.top(), rect.bottom()))
        }
        Edge::Bottom => {
            let x = origin.x - dy_bottom / tan;
            Vec2::new(x.clamp(rect.left(), rect.right()), rect.bottom())
        }
    }
}

/// Divider segment for one slice boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SliceDivider {
    /// Slice index k; the divider sits at angle k * (2π / K).
    pub slice: usize,
    /// Divider angle in radians.
    pub angle: f32,
    /// Segment from the origin to the rectangle-edge exit point.
    pub segment: Segment,
}

/// Label anchor for one slice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabelAnchor {
    /// Slice (topic) index.
    pub slice: usize,
    /// Bisecting angle the label sits on.
    pub angle: f32,
    /// Screen position of the label anchor.
    pub position: Vec2,
}

/// Slice dividers and label anchors for one layout pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SliceGeometry {
    /// One divider per slice boundary. Empty when K = 1 (a single slice
    /// spans the full circle, so there is nothing to divide).
    pub dividers: Vec<SliceDivider>,
    /// One label anchor per slice.
    pub labels: Vec<LabelAnchor>,
}

/// Compute dividers and label anchors for every slice.
///
/// Label anchors sit on each slice's bisecting angle at a radius of
/// `label_radius_ratio` times the distance from the origin to the nearer
/// of the top/bottom drawable edges.
pub fn slice_geometry(
    origin: Vec2,
    rect: &PlotRect,
    basis: &RotationBasis,
    label_radius_ratio: f32,
) -> SliceGeometry {
    let corners = CornerAngles::from_origin(origin, rect);

    let dividers = if basis.is_single() {
        Vec::new()
    } else {
        (0..basis.len())
            .map(|k| {
                let angle = basis.divider_angle(k);
                let exit = divider_exit(origin, rect, &corners, angle);
                SliceDivider {
                    slice: k,
                    angle,
                    segment: Segment::new(origin, exit),
                }
            })
            .collect()
    };

    let dy_top = origin.y - rect.top();
    let dy_bottom = rect.bottom() - origin.y;
    let radius = label_radius_ratio * dy_top.min(dy_bottom);
    let labels = (0..basis.len())
        .map(|k| {
            let angle = basis.bisector_angle(k);
            let position =
                origin + Vec2::new(angle.cos() * radius, -angle.sin() * radius);
            LabelAnchor {
                slice: k,
                angle,
                position,
            }
        })
        .collect();

    SliceGeometry { dividers, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::deg_to_rad;
    use crate::core::Margins;
    use approx::assert_relative_eq;

    fn centered_square() -> (Vec2, PlotRect) {
        let rect = PlotRect::new(800.0, 800.0, Margins::zero());
        (Vec2::new(400.0, 400.0), rect)
    }

    #[test]
    fn test_corner_angles_centered_square() {
        // From the center of a square, corner bearings are the diagonals
        let (origin, rect) = centered_square();
        let corners = CornerAngles::from_origin(origin, &rect);
        assert_relative_eq!(corners.top_right, deg_to_rad(45.0), epsilon = 1e-5);
        assert_relative_eq!(corners.top_left, deg_to_rad(135.0), epsilon = 1e-5);
        assert_relative_eq!(corners.bottom_left, deg_to_rad(225.0), epsilon = 1e-5);
        assert_relative_eq!(corners.bottom_right, deg_to_rad(315.0), epsilon = 1e-5);
    }

    #[test]
    fn test_corner_angles_ascending() {
        let rect = PlotRect::new(800.0, 700.0, Margins::zero());
        let origin = Vec2::new(250.0, 480.0);
        let c = CornerAngles::from_origin(origin, &rect);
        assert!(0.0 < c.top_right);
        assert!(c.top_right < FRAC_PI_2);
        assert!(FRAC_PI_2 < c.top_left);
        assert!(c.top_left < PI);
        assert!(PI < c.bottom_left);
        assert!(c.bottom_left < 1.5 * PI);
        assert!(1.5 * PI < c.bottom_right);
        assert!(c.bottom_right < TWO_PI);
    }

    #[test]
    fn test_axis_aligned_dividers_hit_edge_midpoints() {
        // K=4 from the center of an 800x700 rect: dividers at
        // 0°/90°/180°/270° exit at the four edge midpoints
        let rect = PlotRect::new(800.0, 700.0, Margins::zero());
        let origin = Vec2::new(400.0, 350.0);
        let corners = CornerAngles::from_origin(origin, &rect);

        let cases = [
            (0.0, Vec2::new(800.0, 350.0)),
            (90.0, Vec2::new(400.0, 0.0)),
            (180.0, Vec2::new(0.0, 350.0)),
            (270.0, Vec2::new(400.0, 700.0)),
        ];
        for (deg, expected) in cases {
            let exit = divider_exit(origin, &rect, &corners, deg_to_rad(deg));
            assert_relative_eq!(exit.x, expected.x, epsilon = 1e-3);
            assert_relative_eq!(exit.y, expected.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_diagonal_dividers_hit_corners() {
        let (origin, rect) = centered_square();
        let corners = CornerAngles::from_origin(origin, &rect);

        let exit = divider_exit(origin, &rect, &corners, deg_to_rad(45.0));
        assert_relative_eq!(exit.x, 800.0, epsilon = 0.1);
        assert_relative_eq!(exit.y, 0.0, epsilon = 0.1);

        let exit = divider_exit(origin, &rect, &corners, deg_to_rad(225.0));
        assert_relative_eq!(exit.x, 0.0, epsilon = 0.1);
        assert_relative_eq!(exit.y, 800.0, epsilon = 0.1);
    }

    fn on_perimeter(p: Vec2, rect: &PlotRect) -> bool {
        let on_x_edge = (p.x - rect.left()).abs() < 1e-3 || (p.x - rect.right()).abs() < 1e-3;
        let on_y_edge = (p.y - rect.top()).abs() < 1e-3 || (p.y - rect.bottom()).abs() < 1e-3;
        let x_in = p.x >= rect.left() - 1e-3 && p.x <= rect.right() + 1e-3;
        let y_in = p.y >= rect.top() - 1e-3 && p.y <= rect.bottom() + 1e-3;
        (on_x_edge && y_in) || (on_y_edge && x_in)
    }

    #[test]
    fn test_exits_on_perimeter_offset_origin() {
        let rect = PlotRect::new(640.0, 480.0, Margins::zero());
        for origin in [
            Vec2::new(100.0, 100.0),
            Vec2::new(500.0, 50.0),
            Vec2::new(320.0, 400.0),
            Vec2::new(30.0, 440.0),
        ] {
            let corners = CornerAngles::from_origin(origin, &rect);
            for k in 0..72 {
                let angle = k as f32 * TWO_PI / 72.0;
                let exit = divider_exit(origin, &rect, &corners, angle);
                assert!(
                    on_perimeter(exit, &rect),
                    "exit {:?} off perimeter for origin {:?} angle {}",
                    exit,
                    origin,
                    angle
                );
            }
        }
    }

    #[test]
    fn test_edge_changes_four_times_per_sweep() {
        let rect = PlotRect::new(800.0, 700.0, Margins::zero());
        let origin = Vec2::new(250.0, 480.0);
        let corners = CornerAngles::from_origin(origin, &rect);

        let steps = 1440; // 0.25° increments
        let mut changes = 0;
        let mut prev = Octant::classify(0.0, &corners).edge();
        for i in 1..steps {
            let angle = i as f32 * TWO_PI / steps as f32;
            let edge = Octant::classify(angle, &corners).edge();
            if edge != prev {
                changes += 1;
            }
            prev = edge;
        }
        assert_eq!(changes, 4);
    }

    #[test]
    fn test_octant_edge_mapping() {
        let (origin, rect) = centered_square();
        let corners = CornerAngles::from_origin(origin, &rect);

        let cases = [
            (20.0, Edge::Right),
            (70.0, Edge::Top),
            (110.0, Edge::Top),
            (160.0, Edge::Left),
            (200.0, Edge::Left),
            (250.0, Edge::Bottom),
            (290.0, Edge::Bottom),
            (340.0, Edge::Right),
        ];
        for (deg, expected) in cases {
            let octant = Octant::classify(deg_to_rad(deg), &corners);
            assert_eq!(octant.edge(), expected, "angle {} deg", deg);
        }
    }

    #[test]
    fn test_slice_geometry_counts() {
        let (origin, rect) = centered_square();
        let basis = RotationBasis::new(6).unwrap();
        let geom = slice_geometry(origin, &rect, &basis, 0.8);
        assert_eq!(geom.dividers.len(), 6);
        assert_eq!(geom.labels.len(), 6);
        for divider in &geom.dividers {
            assert_eq!(divider.segment.start, origin);
            assert!(on_perimeter(divider.segment.end, &rect));
        }
    }

    #[test]
    fn test_single_slice_has_no_dividers() {
        let (origin, rect) = centered_square();
        let basis = RotationBasis::new(1).unwrap();
        let geom = slice_geometry(origin, &rect, &basis, 0.8);
        assert!(geom.dividers.is_empty());
        assert_eq!(geom.labels.len(), 1);
    }

    #[test]
    fn test_label_radius_uses_nearer_vertical_edge() {
        let rect = PlotRect::new(800.0, 700.0, Margins::zero());
        // Origin 100 px below the top edge, 600 above the bottom
        let origin = Vec2::new(400.0, 100.0);
        let basis = RotationBasis::new(4).unwrap();
        let geom = slice_geometry(origin, &rect, &basis, 0.8);

        for label in &geom.labels {
            let dist = label.position.distance(&origin);
            assert_relative_eq!(dist, 0.8 * 100.0, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_labels_bisect_slices() {
        let (origin, rect) = centered_square();
        let basis = RotationBasis::new(4).unwrap();
        let geom = slice_geometry(origin, &rect, &basis, 0.8);

        // First label at 45°: up and to the right of the origin
        let first = &geom.labels[0];
        assert_relative_eq!(first.angle, deg_to_rad(45.0), epsilon = 1e-5);
        assert!(first.position.x > origin.x);
        assert!(first.position.y < origin.y); // screen y grows downward
    }
}
