//! Atlas result types.

use std::collections::HashMap;

use dieline_types::PanelId;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// One panel's slot in the atlas: pixel rectangle plus normalized UVs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtlasRegion {
    /// Left edge in atlas pixels.
    pub x: u32,
    /// Top edge in atlas pixels.
    pub y: u32,
    /// Width in atlas pixels (at least 1).
    pub width: u32,
    /// Height in atlas pixels (at least 1).
    pub height: u32,
    /// Left UV coordinate in [0, 1].
    pub u0: f64,
    /// Top UV coordinate in [0, 1].
    pub v0: f64,
    /// Right UV coordinate in [0, 1].
    pub u1: f64,
    /// Bottom UV coordinate in [0, 1].
    pub v1: f64,
}

/// The packed atlas: one canvas plus a per-panel region map.
#[derive(Debug, Clone)]
pub struct Atlas {
    /// The drawn canvas.
    pub image: RgbaImage,
    regions: HashMap<PanelId, AtlasRegion>,
}

impl Atlas {
    pub(crate) fn new(image: RgbaImage, regions: HashMap<PanelId, AtlasRegion>) -> Self {
        Self { image, regions }
    }

    /// Region for a panel, if it was placed.
    #[inline]
    #[must_use]
    pub fn region(&self, panel: PanelId) -> Option<&AtlasRegion> {
        self.regions.get(&panel)
    }

    /// The full panel-to-region map.
    #[inline]
    #[must_use]
    pub const fn regions(&self) -> &HashMap<PanelId, AtlasRegion> {
        &self.regions
    }

    /// Number of placed regions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions were placed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
