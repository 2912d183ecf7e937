//! Bone hierarchy construction for dieline fold animation.
//!
//! Emits one bone per panel, parented identically to the panel tree.
//! The root bone sits at the base panel's center; every other bone sits
//! at the midpoint of the hinge connecting its panel to the parent.
//! Bone positions are stored in the parent bone's local frame, so
//! rotating a parent bone naturally carries all descendant bones — this
//! is what makes flaps "driven" by their structural panel without any
//! runtime rule: the driven relationship lives in the hierarchy itself.
//!
//! # Coordinate Conversion
//!
//! Layout coordinates grow downward; 3D world Y grows upward. A layout
//! point converts as `(x * scale, -y * scale, 0)`.
//!
//! # Example
//!
//! ```
//! use dieline_skeleton::build_skeleton;
//! use dieline_types::{Joint, Panel, PanelId, PanelTree, Rect};
//! use nalgebra::Point2;
//!
//! let mut tree = PanelTree::new(Panel::new(PanelId::new(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0)));
//! tree.attach(
//!     PanelId::new(0),
//!     Panel::new(PanelId::new(1), "lid", Rect::new(0.0, -20.0, 100.0, 20.0)),
//!     Joint::horizontal(Point2::new(0.0, 0.0), 100.0, 2.0),
//! ).unwrap();
//!
//! let skeleton = build_skeleton(&tree, 0.01);
//! assert_eq!(skeleton.len(), 2);
//! assert_eq!(skeleton.bones[1].parent, Some(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod builder;
mod skeleton;

pub use builder::build_skeleton;
pub use skeleton::{Bone, FoldLimit, Skeleton};
