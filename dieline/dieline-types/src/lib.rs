//! Core panel tree types for dieline fold simulation.
//!
//! This crate provides the foundational data model shared by the fold
//! pipeline:
//!
//! - [`Rect`] - Axis-aligned 2D rectangle in layout units
//! - [`Panel`] - One flat face of the packaging, with bounds and joint
//! - [`Joint`] - The hinge connecting a panel to its parent
//! - [`PanelTree`] - Arena-backed rooted tree of panels
//!
//! # Coordinate System
//!
//! Layout coordinates follow the dieline blueprint convention: X grows
//! right, **Y grows downward**. Downstream 3D stages flip Y when
//! converting to world space.
//!
//! # Example
//!
//! ```
//! use dieline_types::{Panel, PanelId, PanelTree, Rect, Joint, JointOrientation};
//! use nalgebra::Point2;
//!
//! let base = Panel::new(PanelId::new(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0));
//! let mut tree = PanelTree::new(base);
//!
//! let lid = Panel::new(PanelId::new(1), "lid", Rect::new(0.0, -40.0, 100.0, 40.0));
//! let hinge = Joint::horizontal(Point2::new(0.0, 0.0), 100.0, 2.0);
//! tree.attach(PanelId::new(0), lid, hinge).unwrap();
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.pre_order(), vec![PanelId::new(0), PanelId::new(1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod joint;
mod panel;
mod rect;
mod tree;

pub use error::{JointError, TreeError, TreeResult};
pub use joint::{FoldDirection, Joint, JointOrientation};
pub use panel::{Panel, PanelId, PanelImage};
pub use rect::Rect;
pub use tree::PanelTree;

// Re-export nalgebra point types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
