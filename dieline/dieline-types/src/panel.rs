//! Panel records: one flat face of the packaging.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Joint, Rect};

/// Stable identifier for a panel within a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelId(u32);

impl PanelId {
    /// Create a panel id from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PanelId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Source artwork for a panel face.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PanelImage {
    /// Encoded raster bytes (PNG, JPEG, ...), decoded by the atlas builder.
    Raster(Vec<u8>),
    /// Closed vector outline in arbitrary 2D units.
    Outline(Vec<Point2<f64>>),
}

/// One flat face of the packaging, as laid out in the dieline.
///
/// Panels are pure data; tree structure (parent/children links) is
/// maintained by [`PanelTree`](crate::PanelTree) as id references.
///
/// # Example
///
/// ```
/// use dieline_types::{Panel, PanelId, Rect};
///
/// let p = Panel::new(PanelId::new(7), "front", Rect::new(0.0, 0.0, 100.0, 60.0));
/// assert_eq!(p.center, p.bounds.center());
/// assert!(p.parent.is_none());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Panel {
    /// Unique id within the tree.
    pub id: PanelId,
    /// Display name supplied by the host.
    pub name: String,
    /// Axis-aligned bounds in layout units.
    pub bounds: Rect,
    /// Center point in layout units.
    pub center: Point2<f64>,
    /// Optional source artwork for the atlas builder.
    pub image: Option<PanelImage>,
    /// Parent panel id; `None` for the root (base) panel.
    pub parent: Option<PanelId>,
    /// Child panel ids, in attach order.
    pub children: Vec<PanelId>,
    /// Hinge to the parent; present on every non-root panel.
    pub joint: Option<Joint>,
    /// Optional per-panel connector-width override.
    pub connector_width: Option<f64>,
}

impl Panel {
    /// Create a detached panel with its center derived from the bounds.
    #[must_use]
    pub fn new(id: PanelId, name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            bounds,
            center: bounds.center(),
            image: None,
            parent: None,
            children: Vec::new(),
            joint: None,
            connector_width: None,
        }
    }

    /// Attach source artwork.
    #[must_use]
    pub fn with_image(mut self, image: PanelImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Set a per-panel connector-width override.
    #[must_use]
    pub const fn with_connector_width(mut self, width: f64) -> Self {
        self.connector_width = Some(width);
        self
    }

    /// Whether this panel is a tree root.
    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_center_from_bounds() {
        let p = Panel::new(PanelId::new(1), "p", Rect::new(10.0, 20.0, 30.0, 40.0));
        assert!((p.center.x - 25.0).abs() < f64::EPSILON);
        assert!((p.center.y - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn panel_id_display() {
        assert_eq!(PanelId::new(42).to_string(), "42");
    }

    #[test]
    fn panel_builders() {
        let p = Panel::new(PanelId::new(1), "p", Rect::new(0.0, 0.0, 1.0, 1.0))
            .with_connector_width(3.0)
            .with_image(PanelImage::Outline(vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.5, 1.0),
            ]));
        assert_eq!(p.connector_width, Some(3.0));
        assert!(matches!(p.image, Some(PanelImage::Outline(_))));
    }
}
