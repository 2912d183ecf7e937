//! Fold sequence inference for dieline layouts.
//!
//! Given a flat list of axis-aligned panel rectangles and a designated
//! base panel, this crate discovers the carton's "spine + flaps" topology
//! by edge coincidence, assigns every panel a coordinate-style display
//! name, and produces the linear order in which panels fold into place.
//!
//! # Features
//!
//! - **Spine classification**: panels level with the base along X are
//!   numbered `2, 3, …` (left) and `-2, -3, …` (right)
//! - **Flap classification**: panels above/below the base or a spine are
//!   named `<parent>-<n>T` / `<parent>-<n>B`
//! - **Driven map**: which panels rigidly follow a parent's fold
//! - **Totality**: the output order is always a permutation of the input,
//!   with `P<n>` fallback names for geometry the classifier cannot place
//!
//! # Example
//!
//! ```
//! use dieline_sequence::{infer_sequence, PanelRect, SequenceParams};
//! use dieline_types::{PanelId, Rect};
//!
//! let panels = vec![
//!     PanelRect::new(PanelId::new(0), Rect::new(0.0, 0.0, 100.0, 60.0)),
//!     PanelRect::new(PanelId::new(1), Rect::new(-50.0, 0.0, 50.0, 60.0)),
//!     PanelRect::new(PanelId::new(2), Rect::new(100.0, 0.0, 50.0, 60.0)),
//! ];
//!
//! let seq = infer_sequence(&panels, PanelId::new(0), &SequenceParams::default());
//! assert_eq!(seq.names[&PanelId::new(0)], "1");
//! assert_eq!(seq.names[&PanelId::new(1)], "2");
//! assert_eq!(seq.names[&PanelId::new(2)], "-2");
//! assert_eq!(seq.order.len(), 3);
//! ```
//!
//! This is a greedy, single-pass geometric classifier, not a general
//! planar-graph solver: it assumes the spine-plus-flaps topology typical
//! of carton dielines, with ties broken by coordinate distance from the
//! base panel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod infer;
mod params;
mod result;

pub use infer::{infer_sequence, PanelRect};
pub use params::{SequenceParams, VerticalOrder};
pub use result::{FoldReason, FoldSequence, FoldStep};
