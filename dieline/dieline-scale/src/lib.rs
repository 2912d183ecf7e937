//! Shape-preserving structural rescaling of dieline panel trees.
//!
//! A dieline's total horizontal extent is not just its design width:
//! side flaps and glue panels extend it by amounts that scale with the
//! design *height*. The [`StructuralScaler`] captures this with a single
//! coupling factor derived once from the original layout, then rescales
//! every panel's bounds, center and joint geometry for new target
//! dimensions while preserving hinge connectivity.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dieline_scale::{DesignDims, StructuralScaler};
//! use dieline_types::{Panel, PanelId, PanelTree, Rect};
//!
//! let tree = Arc::new(PanelTree::new(Panel::new(
//!     PanelId::new(0),
//!     "base",
//!     Rect::new(0.0, 0.0, 100.0, 60.0),
//! )));
//! let dims = DesignDims::new(100.0, 60.0, 1.0);
//! let scaler = StructuralScaler::new(Arc::clone(&tree), dims).unwrap();
//!
//! // Identity target: the very same tree comes back, no allocation.
//! let same = scaler.scale(&dims, None);
//! assert!(Arc::ptr_eq(&same, &tree));
//!
//! // Doubled width: every X coordinate scales by exactly 2.
//! let wide = scaler.scale(&DesignDims::new(200.0, 60.0, 1.0), None);
//! assert_eq!(wide.get(PanelId::new(0)).unwrap().bounds.width, 200.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod scaler;

pub use error::{ScaleError, ScaleResult};
pub use scaler::{DesignDims, StructuralScaler, SCALE_EPSILON};
