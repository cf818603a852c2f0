//! # Chakra-Plot: Radial Topic Projection
//!
//! A geometry engine for plotting documents scored against K latent topics.
//! Each document's non-negative topic-weight vector is projected onto a 2D
//! plane through a rotational basis; the plane is partitioned into K angular
//! slices, one per topic, so a viewer can see which topics dominate which
//! region. The crate owns only the numeric and geometric logic — topic
//! inference, file parsing, and the SVG surface are external collaborators
//! that feed weights in and take points, segments, polygons, and colors out.
//!
//! ## Quick Start
//!
//! ```rust
//! use chakra_plot::{Document, LayoutConfig, LayoutEngine};
//! use chakra_plot::core::Rgb;
//!
//! let config = LayoutConfig::for_plot(4, 800.0, 700.0);
//! let docs = vec![
//!     Document::new("d1", "First doc", vec![3.0, 0.0, 1.0, 0.0]),
//!     Document::new("d2", "Second doc", vec![0.0, 2.0, 0.0, 2.0]),
//! ];
//!
//! let pass = LayoutEngine::run_pass(&config, &docs).unwrap();
//! for (id, placed) in &pass.documents {
//!     println!("{}: ({:.1}, {:.1})", id, placed.point.x, placed.point.y);
//! }
//!
//! // Decompose one document into its per-topic fingerprint
//! let colors: Vec<Rgb> = (0..4).map(Rgb::for_topic).collect();
//! let fingerprint = pass.fingerprint("d1", &colors).unwrap();
//! assert_eq!(fingerprint.triangles.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (Vec2, PlotRect, LinearScale, Rgb)
//! - [`config`]: layout configuration with YAML load/save
//! - [`basis`]: rotational basis (topic unit vectors + divider angles)
//! - [`projection`]: weight vector to point, with per-topic decomposition
//! - [`slices`]: divider/label geometry via corner angles and octants
//! - [`fingerprint`]: per-document triangles, legs, and color blending
//! - [`layout`]: the per-pass pipeline tying the above together
//!
//! ## Data Flow
//!
//! ```text
//!   topic weights ──► projection ──► data-space points
//!                                         │
//!                        scales (per pass, origin in-domain)
//!                                         │
//!         ┌───────────────────────────────┼─────────────────┐
//!         ▼                               ▼                 ▼
//!   screen points                  slice dividers     fingerprints
//!   (one per document)             + label anchors    (on selection)
//! ```
//!
//! ## Conventions
//!
//! Screen coordinates: x right, y down, origin at the rectangle's top-left.
//! Angles: radians, counter-clockwise from +X with "up" positive; the data
//! space is y-up and the y scale inverts its range, so the two agree on
//! which slice is which.
//!
//! Every pass rebuilds its basis, scales, and origin from scratch inside an
//! immutable [`LayoutContext`](layout::LayoutContext); there is no shared
//! mutable layout state.

pub mod basis;
pub mod config;
pub mod core;
pub mod error;
pub mod fingerprint;
pub mod layout;
pub mod projection;
pub mod slices;

// Re-export main types at crate root
pub use basis::RotationBasis;
pub use config::LayoutConfig;
pub use error::LayoutError;
pub use fingerprint::{Fingerprint, FingerprintOverlay};
pub use layout::{Document, LayoutContext, LayoutEngine, LayoutPass, PlacedDocument};
pub use projection::{DocumentPlacement, TopicContribution};
pub use slices::{SliceDivider, SliceGeometry};
