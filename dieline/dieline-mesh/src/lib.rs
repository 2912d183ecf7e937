//! Skinned mesh stitching for dieline fold simulation.
//!
//! Combines a panel tree, a texture atlas region map, and a fold
//! skeleton into one renderable skinned mesh:
//!
//! - Every panel contributes a two-sided surface (quad, rounded
//!   rectangle, or triangulated outline) bound 100% to its own bone
//! - Every parent/child joint contributes a subdivided hinge-bridge
//!   strip whose vertices blend linearly between the two bones, keeping
//!   the surface continuous as panels rotate independently
//!
//! No vertex needs more than two bone influences, so weights are a
//! fixed two-slot array per vertex.
//!
//! # Failure Semantics
//!
//! Stitching never fails outright: a panel with no atlas region emits no
//! surface (its bridge is still attempted against the parent's region),
//! a missing bone skips the panel, and every skip is logged. The host
//! detects a degenerate result by checking counts.
//!
//! # Example
//!
//! ```
//! use dieline_atlas::{build_atlas, AtlasParams};
//! use dieline_mesh::{stitch_mesh, MeshParams};
//! use dieline_skeleton::build_skeleton;
//! use dieline_types::{Panel, PanelId, PanelTree, Rect};
//!
//! let tree = PanelTree::new(Panel::new(PanelId::new(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0)));
//! let atlas = build_atlas(&tree, &AtlasParams::default());
//! let skeleton = build_skeleton(&tree, 0.01);
//!
//! let mesh = stitch_mesh(&tree, atlas.regions(), &skeleton, &MeshParams::default());
//! assert_eq!(mesh.vertex_count(), 8); // two-sided quad
//! assert_eq!(mesh.triangle_count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod mesh;
mod outline;
mod params;
mod stitch;

pub use mesh::{SkinnedMesh, SkinnedVertex, VertexRange};
pub use params::MeshParams;
pub use stitch::stitch_mesh;
