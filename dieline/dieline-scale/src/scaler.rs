//! The structural scaler: coupling factor and tree rebuild.

use std::sync::Arc;

use dieline_types::{JointOrientation, Panel, PanelTree, Point2, Rect};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ScaleError, ScaleResult};

/// Scale factors within this distance of 1.0 short-circuit to the
/// original tree.
pub const SCALE_EPSILON: f64 = 1e-6;

/// Design dimensions of a carton: width, height, thickness in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignDims {
    /// Design width.
    pub width: f64,
    /// Design height.
    pub height: f64,
    /// Material thickness. Does not affect 2D geometry; the geometry
    /// stitcher consumes it.
    pub thickness: f64,
}

impl DesignDims {
    /// Create design dimensions.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64, thickness: f64) -> Self {
        Self {
            width,
            height,
            thickness,
        }
    }
}

/// Rescales a panel tree for new target dimensions.
///
/// The coupling factor `k = (bboxWidth - designWidth) / designHeight` is
/// derived once at construction: it measures how much of the layout's
/// total horizontal extent is attributable to height-driven geometry
/// (side flaps) rather than the width parameter directly. For a target
/// `(width', height')` the new total extent is `width' + k * height'`.
#[derive(Debug, Clone)]
pub struct StructuralScaler {
    original: Arc<PanelTree>,
    dims: DesignDims,
    bounds: Rect,
    coupling: f64,
}

impl StructuralScaler {
    /// Create a scaler for an original tree and its design dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if a design dimension is not positive or the
    /// tree's bounding width is zero.
    pub fn new(original: Arc<PanelTree>, dims: DesignDims) -> ScaleResult<Self> {
        for (name, value) in [("width", dims.width), ("height", dims.height)] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ScaleError::NonPositiveDimension { name, value });
            }
        }
        let bounds = original.bounding_rect();
        if bounds.width <= 0.0 {
            return Err(ScaleError::DegenerateBounds);
        }
        let coupling = (bounds.width - dims.width) / dims.height;
        debug!(coupling, bbox_width = bounds.width, "structural scaler ready");
        Ok(Self {
            original,
            dims,
            bounds,
            coupling,
        })
    }

    /// The height-to-horizontal-extent coupling factor.
    #[inline]
    #[must_use]
    pub const fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Scale factors `(sx, sy)` for a target.
    #[must_use]
    pub fn factors(&self, target: &DesignDims) -> (f64, f64) {
        let new_total_x = self.coupling.mul_add(target.height, target.width);
        (
            new_total_x / self.bounds.width,
            target.height / self.dims.height,
        )
    }

    /// Produce a tree rescaled for the target dimensions.
    ///
    /// When both scale factors are within [`SCALE_EPSILON`] of 1.0 and no
    /// connector-width override is supplied, this returns the original
    /// tree reference unchanged — callers can detect the fast path with
    /// `Arc::ptr_eq`. Otherwise a fully rebuilt tree is returned; the
    /// original is never mutated.
    #[must_use]
    pub fn scale(&self, target: &DesignDims, connector_width: Option<f64>) -> Arc<PanelTree> {
        let (sx, sy) = self.factors(target);
        if (sx - 1.0).abs() < SCALE_EPSILON
            && (sy - 1.0).abs() < SCALE_EPSILON
            && connector_width.is_none()
        {
            return Arc::clone(&self.original);
        }

        let joint_width_scale = sx.min(sy);
        let panels: Vec<Panel> = self
            .original
            .panels()
            .map(|panel| scale_panel(panel, sx, sy, joint_width_scale, connector_width))
            .collect();

        match PanelTree::from_parts(panels) {
            Ok(tree) => Arc::new(tree),
            Err(error) => {
                // A well-formed original cannot produce this; degrade to
                // the unscaled tree rather than aborting the pipeline.
                warn!(%error, "rescaled tree failed validation, keeping original");
                Arc::clone(&self.original)
            }
        }
    }
}

fn scale_panel(
    panel: &Panel,
    sx: f64,
    sy: f64,
    joint_width_scale: f64,
    connector_width: Option<f64>,
) -> Panel {
    let mut scaled = panel.clone();
    scaled.bounds = Rect::new(
        panel.bounds.x * sx,
        panel.bounds.y * sy,
        panel.bounds.width * sx,
        panel.bounds.height * sy,
    );
    scaled.center = Point2::new(panel.center.x * sx, panel.center.y * sy);
    if let Some(joint) = scaled.joint.as_mut() {
        joint.position = Point2::new(joint.position.x * sx, joint.position.y * sy);
        joint.length *= match joint.orientation {
            JointOrientation::Horizontal => sx,
            JointOrientation::Vertical => sy,
        };
        // min(sx, sy) keeps hinges from over-thickening on anisotropic scales.
        joint.width *= joint_width_scale;
        if connector_width.is_some() {
            joint.connector_width = connector_width;
        }
    }
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use dieline_types::{Joint, PanelId};

    fn sample_tree() -> Arc<PanelTree> {
        let mut tree = PanelTree::new(Panel::new(
            PanelId::new(0),
            "base",
            Rect::new(0.0, 0.0, 100.0, 60.0),
        ));
        tree.attach(
            PanelId::new(0),
            Panel::new(PanelId::new(1), "left", Rect::new(-30.0, 0.0, 30.0, 60.0)),
            Joint::vertical(Point2::new(0.0, 0.0), 60.0, 2.0),
        )
        .unwrap();
        tree.attach(
            PanelId::new(0),
            Panel::new(PanelId::new(2), "lid", Rect::new(0.0, -20.0, 100.0, 20.0)),
            Joint::horizontal(Point2::new(0.0, 0.0), 100.0, 2.0),
        )
        .unwrap();
        Arc::new(tree)
    }

    fn dims() -> DesignDims {
        DesignDims::new(100.0, 60.0, 1.0)
    }

    #[test]
    fn identity_returns_same_reference() {
        let tree = sample_tree();
        let scaler = StructuralScaler::new(Arc::clone(&tree), dims()).unwrap();
        let scaled = scaler.scale(&dims(), None);
        assert!(Arc::ptr_eq(&scaled, &tree));
    }

    #[test]
    fn connector_override_defeats_identity() {
        let tree = sample_tree();
        let scaler = StructuralScaler::new(Arc::clone(&tree), dims()).unwrap();
        let scaled = scaler.scale(&dims(), Some(4.0));
        assert!(!Arc::ptr_eq(&scaled, &tree));
        let joint = scaled.get(PanelId::new(1)).unwrap().joint.clone().unwrap();
        assert_eq!(joint.connector_width, Some(4.0));
    }

    #[test]
    fn coupling_factor_from_layout() {
        // bbox width = 130 (left flap extends 30 past the design width).
        let scaler = StructuralScaler::new(sample_tree(), dims()).unwrap();
        assert_relative_eq!(scaler.coupling(), 30.0 / 60.0);
    }

    #[test]
    fn doubling_width_scales_x_by_two() {
        let tree = sample_tree();
        let scaler = StructuralScaler::new(Arc::clone(&tree), dims()).unwrap();
        // Height fixed, so new total x = 230 + 0.5*60 = 260 = 2 * bbox width.
        let target = DesignDims::new(230.0, 60.0, 1.0);
        let (sx, sy) = scaler.factors(&target);
        assert_relative_eq!(sx, 2.0);
        assert_relative_eq!(sy, 1.0);

        let scaled = scaler.scale(&target, None);
        for panel in tree.panels() {
            let s = scaled.get(panel.id).unwrap();
            assert_relative_eq!(s.bounds.x, panel.bounds.x * 2.0);
            assert_relative_eq!(s.bounds.width, panel.bounds.width * 2.0);
            assert_relative_eq!(s.bounds.y, panel.bounds.y);
            assert_relative_eq!(s.bounds.height, panel.bounds.height);
            assert_relative_eq!(s.center.x, panel.center.x * 2.0);
        }
    }

    #[test]
    fn joint_geometry_scales_with_axis() {
        let tree = sample_tree();
        let scaler = StructuralScaler::new(Arc::clone(&tree), dims()).unwrap();
        let target = DesignDims::new(230.0, 60.0, 1.0); // sx = 2, sy = 1

        let scaled = scaler.scale(&target, None);
        // Vertical joint: length follows Y (unchanged), width follows min(sx, sy).
        let vertical = scaled.get(PanelId::new(1)).unwrap().joint.clone().unwrap();
        assert_relative_eq!(vertical.length, 60.0);
        assert_relative_eq!(vertical.width, 2.0);
        // Horizontal joint: length follows X (doubled).
        let horizontal = scaled.get(PanelId::new(2)).unwrap().joint.clone().unwrap();
        assert_relative_eq!(horizontal.length, 200.0);
    }

    #[test]
    fn original_tree_not_mutated() {
        let tree = sample_tree();
        let scaler = StructuralScaler::new(Arc::clone(&tree), dims()).unwrap();
        let _scaled = scaler.scale(&DesignDims::new(230.0, 120.0, 1.0), None);
        assert_relative_eq!(tree.get(PanelId::new(0)).unwrap().bounds.width, 100.0);
    }

    #[test]
    fn rejects_non_positive_dims() {
        let result = StructuralScaler::new(sample_tree(), DesignDims::new(0.0, 60.0, 1.0));
        assert!(matches!(
            result,
            Err(ScaleError::NonPositiveDimension { name: "width", .. })
        ));
    }
}
