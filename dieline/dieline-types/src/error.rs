//! Error types for panel tree construction.

use thiserror::Error;

use crate::PanelId;

/// Result type for tree construction operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while building a panel tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A panel with this id already exists in the tree.
    #[error("duplicate panel id {0}")]
    DuplicateId(PanelId),

    /// The named parent panel does not exist.
    #[error("unknown parent panel {0}")]
    UnknownParent(PanelId),

    /// A panel references an id that is not in the tree.
    #[error("unknown panel {0}")]
    UnknownPanel(PanelId),

    /// The tree does not have exactly one root panel.
    #[error("expected exactly one root panel, found {0}")]
    RootCount(usize),

    /// A non-root panel is missing its joint to the parent.
    #[error("panel {0} has a parent but no joint")]
    MissingJoint(PanelId),

    /// A joint failed validation.
    #[error("invalid joint on panel {panel}")]
    Joint {
        /// Panel carrying the bad joint.
        panel: PanelId,
        /// Underlying joint error.
        #[source]
        source: JointError,
    },
}

/// Errors for invalid joint geometry.
#[derive(Debug, Error)]
pub enum JointError {
    /// Joint length must be positive.
    #[error("joint length must be positive, got {0}")]
    NonPositiveLength(f64),

    /// Joint width must be non-negative.
    #[error("joint width must be non-negative, got {0}")]
    NegativeWidth(f64),

    /// Maximum fold angle must lie in [0, pi].
    #[error("max fold angle must be in [0, pi], got {0}")]
    AngleOutOfRange(f64),
}
