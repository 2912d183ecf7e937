//! Stitching parameters.

/// Tuning knobs for [`stitch_mesh`](crate::stitch_mesh).
#[derive(Debug, Clone, PartialEq)]
pub struct MeshParams {
    /// Cross-sections per hinge bridge. More segments bend smoother.
    pub joint_segments: usize,
    /// Corner radius for panel surfaces, in layout units. Zero keeps
    /// plain quads; positive values route the surface through a rounded
    /// rectangle outline.
    pub corner_radius: f64,
    /// Slab thickness in 3D units. Front and back faces sit at
    /// `±thickness / 2`.
    pub thickness: f64,
    /// Emit a back face with reversed winding for every surface and
    /// bridge.
    pub double_sided: bool,
    /// Layout-to-3D uniform scale. Must match the scale the skeleton
    /// was built with, or bridges detach from their bones.
    pub layout_scale: f64,
}

impl MeshParams {
    /// Default bridge subdivision count.
    pub const DEFAULT_JOINT_SEGMENTS: usize = 4;

    /// Set the bridge subdivision count.
    #[must_use]
    pub const fn with_joint_segments(mut self, segments: usize) -> Self {
        self.joint_segments = segments;
        self
    }

    /// Set the panel corner radius in layout units.
    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the slab thickness in 3D units.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Enable or disable back faces.
    #[must_use]
    pub const fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// Set the layout-to-3D scale.
    #[must_use]
    pub const fn with_layout_scale(mut self, scale: f64) -> Self {
        self.layout_scale = scale;
        self
    }
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            joint_segments: Self::DEFAULT_JOINT_SEGMENTS,
            corner_radius: 0.0,
            thickness: 0.2,
            double_sided: true,
            layout_scale: 1.0,
        }
    }
}
