//! Skeleton construction from a panel tree.

use dieline_types::{PanelTree, Point2};
use nalgebra::Point3;
use tracing::{debug, warn};

use crate::skeleton::{Bone, FoldLimit, Skeleton};

/// Build a bone hierarchy for a panel tree.
///
/// One bone per panel, visited in pre-order. The root bone is placed at
/// the root panel's center; every other bone at its joint's hinge
/// midpoint. Stored positions are relative to the parent bone's frame,
/// converted to 3D as `(dx * layout_scale, -dy * layout_scale, 0)`.
///
/// A well-formed tree (single root, joints on every non-root panel)
/// always succeeds. A non-root panel missing its joint anchors at its
/// center instead, with a warning.
///
/// # Example
///
/// ```
/// use dieline_skeleton::build_skeleton;
/// use dieline_types::{Panel, PanelId, PanelTree, Rect};
///
/// let tree = PanelTree::new(Panel::new(PanelId::new(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0)));
/// let skeleton = build_skeleton(&tree, 1.0);
/// assert_eq!(skeleton.len(), 1);
/// assert_eq!(skeleton.bone_index(PanelId::new(0)), Some(0));
/// ```
#[must_use]
pub fn build_skeleton(tree: &PanelTree, layout_scale: f64) -> Skeleton {
    let mut skeleton = Skeleton::with_capacity(tree.len());

    for id in tree.pre_order() {
        let Some(panel) = tree.get(id) else {
            continue;
        };

        let anchor: Point2<f64> = match (&panel.parent, &panel.joint) {
            (None, _) => panel.center,
            (Some(_), Some(joint)) => joint.midpoint(),
            (Some(_), None) => {
                warn!(panel = %id, "non-root panel without joint, anchoring at center");
                panel.center
            }
        };

        let parent_bone = panel.parent.and_then(|pid| skeleton.bone_index(pid));
        // Local offset from the parent's anchor; the root is world-anchored.
        let local_2d = match panel.parent.and_then(|pid| skeleton.anchor(pid)) {
            Some(parent_anchor) => anchor - parent_anchor,
            None => anchor.coords,
        };
        let local_position = Point3::new(
            local_2d.x * layout_scale,
            -local_2d.y * layout_scale,
            0.0,
        );

        let limit = panel.joint.as_ref().map(|joint| FoldLimit {
            max_angle: joint.max_angle,
            direction: joint.direction,
        });

        let index = skeleton.len();
        skeleton.push(
            Bone {
                index,
                parent: parent_bone,
                panel: id,
                local_position,
                limit,
            },
            anchor,
        );
    }

    debug!(bones = skeleton.len(), "skeleton built");
    skeleton
}
