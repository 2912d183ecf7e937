//! Dieline fold simulation: from a flat packaging layout to a posed,
//! textured 3D model.
//!
//! This umbrella crate re-exports the dieline-* crates under short
//! module names and adds [`pipeline::simulate`], which runs the whole
//! chain over one panel tree.
//!
//! # Quick Start
//!
//! ```
//! use dieline::prelude::*;
//! use std::sync::Arc;
//!
//! let mut tree = PanelTree::new(Panel::new(
//!     PanelId::new(0),
//!     "base",
//!     Rect::new(0.0, 0.0, 100.0, 60.0),
//! ));
//! tree.attach(
//!     PanelId::new(0),
//!     Panel::new(PanelId::new(1), "lid", Rect::new(0.0, -32.0, 100.0, 30.0)),
//!     Joint::horizontal(Point2::new(0.0, -1.0), 100.0, 2.0),
//! )
//! .unwrap();
//!
//! let result = simulate(Arc::new(tree), &PipelineParams::default());
//! assert_eq!(result.sequence.len(), 2);
//! assert_eq!(result.skeleton.len(), 2);
//! assert!(result.mesh.triangle_count() > 0);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Panel tree, joints, rectangles, ids
//! - [`sequence`] - Fold order, naming, and driven-flap inference
//! - [`scale`] - Coupling-factor structural rescaling
//! - [`skeleton`] - Bone hierarchy mirroring the panel tree
//! - [`atlas`] - Letterboxed texture atlas
//! - [`mesh`] - Skinned surface and hinge-bridge stitching
//! - [`pipeline`] - One-call assembly of all of the above

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Panel tree, joints, rectangles, ids.
pub use dieline_types as types;

/// Fold order, naming, and driven-flap inference.
pub use dieline_sequence as sequence;

/// Coupling-factor structural rescaling.
pub use dieline_scale as scale;

/// Bone hierarchy mirroring the panel tree.
pub use dieline_skeleton as skeleton;

/// Letterboxed texture atlas.
pub use dieline_atlas as atlas;

/// Skinned surface and hinge-bridge stitching.
pub use dieline_mesh as mesh;

pub mod pipeline;

/// Common imports for fold simulation.
///
/// # Usage
///
/// ```
/// use dieline::prelude::*;
/// ```
pub mod prelude {
    pub use dieline_atlas::{build_atlas, Atlas, AtlasParams};
    pub use dieline_mesh::{stitch_mesh, MeshParams, SkinnedMesh};
    pub use dieline_scale::{DesignDims, StructuralScaler};
    pub use dieline_sequence::{infer_sequence, FoldSequence, SequenceParams};
    pub use dieline_skeleton::{build_skeleton, Skeleton};
    pub use dieline_types::{Joint, Panel, PanelId, PanelTree, Point2, Rect};

    pub use crate::pipeline::{simulate, FoldSimulation, PipelineParams};
}
