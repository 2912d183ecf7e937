//! Error types for structural scaling.

use thiserror::Error;

/// Result type for scaler construction.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Errors that can occur when constructing a [`StructuralScaler`](crate::StructuralScaler).
#[derive(Debug, Error)]
pub enum ScaleError {
    /// A design dimension must be positive.
    #[error("design {name} must be positive, got {value}")]
    NonPositiveDimension {
        /// Which dimension was invalid.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The original tree has no horizontal extent to scale against.
    #[error("original layout has zero bounding width")]
    DegenerateBounds,
}
