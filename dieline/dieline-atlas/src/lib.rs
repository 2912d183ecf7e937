//! Packed texture atlas construction for dieline panels.
//!
//! Every panel's source artwork is drawn into one shared canvas, keeping
//! the dieline's relative proportions: the layout bounding box is
//! letterboxed into the canvas with a single uniform scale, so panel
//! regions never overlap and sample at consistent density.
//!
//! # Failure Semantics
//!
//! Per-panel failures are local and non-fatal: a panel whose raster
//! bytes fail to decode gets a bordered placeholder and the build
//! continues. The only way to get a useless atlas is to supply a layout
//! with no area.
//!
//! # Example
//!
//! ```
//! use dieline_atlas::{build_atlas, AtlasParams};
//! use dieline_types::{Panel, PanelId, PanelTree, Rect};
//!
//! let tree = PanelTree::new(Panel::new(PanelId::new(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0)));
//! let atlas = build_atlas(&tree, &AtlasParams::default());
//!
//! let region = atlas.region(PanelId::new(0)).unwrap();
//! assert!(region.u0 < region.u1);
//! assert!(region.v1 <= 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod builder;
mod draw;
mod params;
mod region;

pub use builder::build_atlas;
pub use params::AtlasParams;
pub use region::{Atlas, AtlasRegion};
