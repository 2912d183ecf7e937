//! Skeleton result types.

use std::collections::HashMap;

use dieline_types::{FoldDirection, PanelId};
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Per-bone fold limits for the renderer.
///
/// The renderer poses each bone as `angle = progress * direction.sign()
/// * max_angle` from an externally owned fold-progress scalar; posing
/// itself is outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldLimit {
    /// Maximum fold angle in radians.
    pub max_angle: f64,
    /// Rotation direction around the hinge axis.
    pub direction: FoldDirection,
}

/// One bone of the fold skeleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bone {
    /// Index of this bone in [`Skeleton::bones`].
    pub index: usize,
    /// Parent bone index; `None` for the root bone.
    pub parent: Option<usize>,
    /// The panel this bone deforms.
    pub panel: PanelId,
    /// Position relative to the parent bone's frame (world position for
    /// the root), in 3D units.
    pub local_position: Point3<f64>,
    /// Fold limits from the panel's joint; `None` for the root.
    pub limit: Option<FoldLimit>,
}

/// A bone hierarchy mirroring a panel tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skeleton {
    /// Bones in pre-order: every parent precedes its children.
    pub bones: Vec<Bone>,
    bone_of: HashMap<PanelId, usize>,
    panel_of: Vec<PanelId>,
    anchors: HashMap<PanelId, Point2<f64>>,
}

impl Skeleton {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bones: Vec::with_capacity(capacity),
            bone_of: HashMap::with_capacity(capacity),
            panel_of: Vec::with_capacity(capacity),
            anchors: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, bone: Bone, anchor: Point2<f64>) {
        self.bone_of.insert(bone.panel, bone.index);
        self.panel_of.push(bone.panel);
        self.anchors.insert(bone.panel, anchor);
        self.bones.push(bone);
    }

    /// Number of bones. Equals the panel count of the source tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Whether the skeleton has no bones.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Bone index for a panel.
    #[inline]
    #[must_use]
    pub fn bone_index(&self, panel: PanelId) -> Option<usize> {
        self.bone_of.get(&panel).copied()
    }

    /// Panel deformed by a bone.
    #[inline]
    #[must_use]
    pub fn panel_at(&self, bone: usize) -> Option<PanelId> {
        self.panel_of.get(bone).copied()
    }

    /// The 2D layout-space anchor a panel's bone was placed at (panel
    /// center for the root, hinge midpoint otherwise), exposed for
    /// consumers that need a bone's source position in the layout plane.
    #[inline]
    #[must_use]
    pub fn anchor(&self, panel: PanelId) -> Option<Point2<f64>> {
        self.anchors.get(&panel).copied()
    }

    /// World-space rest position of a bone, chaining local positions up
    /// the hierarchy.
    #[must_use]
    pub fn world_position(&self, bone: usize) -> Option<Point3<f64>> {
        let mut position = Point3::origin();
        let mut current = Some(bone);
        // Walk to the root accumulating local offsets; rest pose has no
        // rotations so plain vector addition suffices.
        while let Some(index) = current {
            let b = self.bones.get(index)?;
            position += b.local_position.coords;
            current = b.parent;
        }
        Some(position)
    }
}
