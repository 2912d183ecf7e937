//! Fold sequence result types.

use std::collections::HashMap;

use dieline_types::PanelId;
use serde::{Deserialize, Serialize};

/// Why a panel folds at its position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldReason {
    /// The base panel; it does not rotate.
    Base,
    /// Structural panel left of the base.
    SpineLeft,
    /// Structural panel right of the base.
    SpineRight,
    /// Bottom flap of a spine panel.
    FlapBottom,
    /// Top flap of a spine panel.
    FlapTop,
    /// Bottom flap of the base panel.
    RootFlapBottom,
    /// Top flap of the base panel.
    RootFlapTop,
    /// Geometry the classifier could not place.
    Unresolved,
}

impl std::fmt::Display for FoldReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Base => "base panel",
            Self::SpineLeft => "spine panel left of base",
            Self::SpineRight => "spine panel right of base",
            Self::FlapBottom => "bottom flap of spine",
            Self::FlapTop => "top flap of spine",
            Self::RootFlapBottom => "bottom flap of base",
            Self::RootFlapTop => "top flap of base",
            Self::Unresolved => "unresolved geometry",
        };
        f.write_str(tag)
    }
}

/// One step of the fold sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldStep {
    /// Zero-based position in the sequence.
    pub order: usize,
    /// The panel folding at this step.
    pub panel: PanelId,
    /// Generated coordinate-style display name.
    pub name: String,
    /// Human-readable reason tag.
    pub reason: FoldReason,
    /// Animation batch: steps sharing a group fold together.
    pub group: u32,
    /// Panels rigidly carried by this panel's fold.
    pub driven: Vec<PanelId>,
}

/// The inferred fold sequence for a layout.
///
/// The sequence is total over the input: `order` is a permutation of the
/// input panel ids even when geometric classification fails for some of
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoldSequence {
    /// Panel ids in the order they should rotate into place.
    pub order: Vec<PanelId>,
    /// Generated display name per panel.
    pub names: HashMap<PanelId, String>,
    /// Parent panel id to the flap ids its fold rigidly carries.
    pub driven: HashMap<PanelId, Vec<PanelId>>,
    /// Per-step records, parallel to `order`.
    pub steps: Vec<FoldStep>,
}

impl FoldSequence {
    /// Number of steps in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the sequence is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
