//! Atlas configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`build_atlas`](crate::build_atlas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasParams {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Padding around the letterboxed layout and between the canvas
    /// border and panel regions, in pixels.
    pub padding: u32,
    /// Canvas background color, RGBA.
    pub background: [u8; 4],
}

impl AtlasParams {
    /// Default canvas edge in pixels.
    pub const DEFAULT_SIZE: u32 = 1024;
    /// Default padding in pixels.
    pub const DEFAULT_PADDING: u32 = 4;
}

impl Default for AtlasParams {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            padding: Self::DEFAULT_PADDING,
            background: [0, 0, 0, 0],
        }
    }
}
