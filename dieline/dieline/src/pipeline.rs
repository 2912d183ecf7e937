//! One-call assembly of the fold-simulation chain.

use std::sync::Arc;

use dieline_atlas::{build_atlas, Atlas, AtlasParams};
use dieline_mesh::{stitch_mesh, MeshParams, SkinnedMesh};
use dieline_sequence::{infer_sequence, FoldSequence, PanelRect, SequenceParams};
use dieline_skeleton::{build_skeleton, Skeleton};
use dieline_types::PanelTree;
use tracing::debug;

/// Parameters for every stage of [`simulate`].
#[derive(Debug, Clone, Default)]
pub struct PipelineParams {
    /// Fold sequence inference tuning.
    pub sequence: SequenceParams,
    /// Atlas canvas configuration.
    pub atlas: AtlasParams,
    /// Mesh stitching configuration. Its `layout_scale` also places the
    /// skeleton, keeping bones and geometry in the same 3D frame.
    pub mesh: MeshParams,
}

/// The bundled output of one simulation run.
#[derive(Debug, Clone)]
pub struct FoldSimulation {
    /// The panel tree the run was built from.
    pub tree: Arc<PanelTree>,
    /// Fold order, display names, and driven flaps.
    pub sequence: FoldSequence,
    /// Bone hierarchy, one bone per panel.
    pub skeleton: Skeleton,
    /// Texture atlas canvas and per-panel regions.
    pub atlas: Atlas,
    /// Skinned render mesh.
    pub mesh: SkinnedMesh,
}

/// Run the whole chain over one panel tree.
///
/// Stages run in dependency order: sequence inference and the skeleton
/// read only the tree; the mesh reads the skeleton and the atlas
/// regions. Every stage degrades rather than fails, so this function is
/// total over valid trees.
///
/// To simulate at a different physical size, rescale the tree first
/// with [`StructuralScaler`](dieline_scale::StructuralScaler) and pass
/// the scaled tree here.
#[must_use]
pub fn simulate(tree: Arc<PanelTree>, params: &PipelineParams) -> FoldSimulation {
    let rects: Vec<PanelRect> = tree.panels().map(PanelRect::from).collect();
    let sequence = infer_sequence(&rects, tree.root(), &params.sequence);
    let skeleton = build_skeleton(&tree, params.mesh.layout_scale);
    let atlas = build_atlas(&tree, &params.atlas);
    let mesh = stitch_mesh(&tree, atlas.regions(), &skeleton, &params.mesh);

    debug!(
        panels = tree.len(),
        steps = sequence.len(),
        bones = skeleton.len(),
        vertices = mesh.vertex_count(),
        "fold simulation assembled"
    );
    FoldSimulation {
        tree,
        sequence,
        skeleton,
        atlas,
        mesh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dieline_types::{Joint, Panel, PanelId, Point2, Rect};

    #[test]
    fn single_panel_runs_end_to_end() {
        let tree = Arc::new(PanelTree::new(Panel::new(
            PanelId::new(7),
            "base",
            Rect::new(0.0, 0.0, 50.0, 50.0),
        )));
        let result = simulate(Arc::clone(&tree), &PipelineParams::default());
        assert!(Arc::ptr_eq(&result.tree, &tree));
        assert_eq!(result.sequence.len(), 1);
        assert_eq!(result.skeleton.len(), 1);
        assert_eq!(result.atlas.len(), 1);
        assert_eq!(result.mesh.ranges.len(), 1);
    }

    #[test]
    fn stages_agree_on_panel_count() {
        let mut tree = PanelTree::new(Panel::new(
            PanelId::new(0),
            "base",
            Rect::new(0.0, 0.0, 100.0, 60.0),
        ));
        tree.attach(
            PanelId::new(0),
            Panel::new(PanelId::new(1), "left", Rect::new(-42.0, 0.0, 40.0, 60.0)),
            Joint::vertical(Point2::new(-1.0, 0.0), 60.0, 2.0),
        )
        .unwrap();
        tree.attach(
            PanelId::new(0),
            Panel::new(PanelId::new(2), "flap", Rect::new(0.0, 62.0, 100.0, 20.0)),
            Joint::horizontal(Point2::new(0.0, 61.0), 100.0, 2.0),
        )
        .unwrap();

        let result = simulate(Arc::new(tree), &PipelineParams::default());
        assert_eq!(result.sequence.len(), 3);
        assert_eq!(result.skeleton.len(), 3);
        assert_eq!(result.atlas.len(), 3);
        assert_eq!(result.mesh.ranges.len(), 3);
        for panel in result.tree.panels() {
            assert!(result.mesh.range(panel.id).is_some());
        }
    }
}
