//! Parameters for fold sequence inference.

use serde::{Deserialize, Serialize};

/// Which flap row folds first within a phase.
///
/// Bottom flaps are typically interior (they close first and end up
/// underneath); top flaps typically form the final seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalOrder {
    /// Bottom flaps fold before top flaps.
    #[default]
    BottomFirst,
    /// Top flaps fold before bottom flaps.
    TopFirst,
}

/// Parameters for [`infer_sequence`](crate::infer_sequence).
///
/// The tolerance absorbs layout imprecision: dielines are drawn by hand
/// or imported from design tools, so "coincident" edges routinely differ
/// by a few layout pixels. Tolerances are configurable constants and are
/// not expected to generalize to arbitrary non-rectangular dielines
/// without validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceParams {
    /// Edge-coincidence tolerance in layout units.
    pub tolerance: f64,
    /// Bottom-first or top-first flap ordering.
    pub vertical_order: VerticalOrder,
}

impl SequenceParams {
    /// Default edge-coincidence tolerance in layout units.
    pub const DEFAULT_TOLERANCE: f64 = 3.0;
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            vertical_order: VerticalOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = SequenceParams::default();
        assert!(p.tolerance > 0.0);
        assert_eq!(p.vertical_order, VerticalOrder::BottomFirst);
    }
}
