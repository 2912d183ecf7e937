//! Skinned mesh result types.

use std::collections::HashMap;

use dieline_types::{PanelId, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// One vertex of the stitched mesh.
///
/// Skinning uses a fixed two-slot layout. Panel-surface vertices carry
/// their full weight in slot 0; hinge-bridge vertices blend between the
/// parent bone (slot 0) and the child bone (slot 1). Weights always sum
/// to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinnedVertex {
    /// Rest-pose position in 3D units.
    pub position: Point3<f64>,
    /// Rest-pose unit normal.
    pub normal: Vector3<f64>,
    /// Atlas texture coordinates.
    pub uv: [f64; 2],
    /// Influencing bone indices into the skeleton's bone array.
    pub bones: [u32; 2],
    /// Per-slot blend weights, summing to 1.
    pub weights: [f64; 2],
}

/// A contiguous run of vertices belonging to one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRange {
    /// First vertex index of the run.
    pub start: u32,
    /// Number of vertices in the run. Zero when the panel was skipped.
    pub count: u32,
}

/// The stitched, skinned output mesh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkinnedMesh {
    /// All vertices, grouped per panel in tree pre-order.
    pub vertices: Vec<SkinnedVertex>,
    /// Triangle index list, counter-clockwise when viewed from the
    /// front (+Z in the rest pose).
    pub indices: Vec<[u32; 3]>,
    /// Per-panel vertex runs, covering the panel's surface and the
    /// bridge that attaches it to its parent.
    pub ranges: HashMap<PanelId, VertexRange>,
}

impl SkinnedMesh {
    /// Total vertex count.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total triangle count.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// The vertex run for one panel, if the panel was stitched.
    #[inline]
    #[must_use]
    pub fn range(&self, panel: PanelId) -> Option<VertexRange> {
        self.ranges.get(&panel).copied()
    }
}
