//! Hinge joints connecting a panel to its parent.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::JointError;

/// Orientation of a hinge line in the layout plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointOrientation {
    /// The hinge line runs along the X axis.
    Horizontal,
    /// The hinge line runs along the Y axis.
    Vertical,
}

/// Which way a hinge rotates when folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FoldDirection {
    /// Rotate in the positive sense around the hinge axis.
    #[default]
    Positive,
    /// Rotate in the negative sense around the hinge axis.
    Negative,
}

impl FoldDirection {
    /// The rotation sign, `+1.0` or `-1.0`.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// The fold line connecting a panel to its parent panel.
///
/// `position` anchors the start of the hinge centerline; the line extends
/// `length` units along the joint's orientation axis. `width` is the
/// connector width: it sets both the hinge-bridge blend distance and the
/// gap the bridge geometry spans.
///
/// # Example
///
/// ```
/// use dieline_types::{Joint, JointOrientation};
/// use nalgebra::Point2;
///
/// let j = Joint::horizontal(Point2::new(0.0, 60.0), 100.0, 2.0);
/// assert_eq!(j.orientation, JointOrientation::Horizontal);
/// assert_eq!(j.midpoint(), Point2::new(50.0, 60.0));
/// assert!(j.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Joint {
    /// Hinge line orientation.
    pub orientation: JointOrientation,
    /// Anchor point of the hinge centerline, in layout units.
    pub position: Point2<f64>,
    /// Hinge length along its orientation axis. Must be positive.
    pub length: f64,
    /// Connector width across the hinge. Must be non-negative.
    pub width: f64,
    /// Which way the hinge rotates.
    pub direction: FoldDirection,
    /// Maximum fold angle in radians, in [0, pi].
    pub max_angle: f64,
    /// Optional per-joint connector-width override.
    pub connector_width: Option<f64>,
}

impl Joint {
    /// Default maximum fold angle: a quarter turn.
    pub const DEFAULT_MAX_ANGLE: f64 = std::f64::consts::FRAC_PI_2;

    /// Create a horizontal joint with default direction and fold angle.
    #[must_use]
    pub fn horizontal(position: Point2<f64>, length: f64, width: f64) -> Self {
        Self {
            orientation: JointOrientation::Horizontal,
            position,
            length,
            width,
            direction: FoldDirection::default(),
            max_angle: Self::DEFAULT_MAX_ANGLE,
            connector_width: None,
        }
    }

    /// Create a vertical joint with default direction and fold angle.
    #[must_use]
    pub fn vertical(position: Point2<f64>, length: f64, width: f64) -> Self {
        Self {
            orientation: JointOrientation::Vertical,
            position,
            length,
            width,
            direction: FoldDirection::default(),
            max_angle: Self::DEFAULT_MAX_ANGLE,
            connector_width: None,
        }
    }

    /// Set the fold direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: FoldDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the maximum fold angle in radians.
    #[must_use]
    pub const fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.max_angle = max_angle;
        self
    }

    /// Midpoint of the hinge line.
    ///
    /// Horizontal joints extend along X, vertical joints along Y.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> Point2<f64> {
        match self.orientation {
            JointOrientation::Horizontal => {
                Point2::new(self.position.x + self.length * 0.5, self.position.y)
            }
            JointOrientation::Vertical => {
                Point2::new(self.position.x, self.position.y + self.length * 0.5)
            }
        }
    }

    /// Effective connector width: the per-joint override when present,
    /// the hinge width otherwise.
    #[inline]
    #[must_use]
    pub fn effective_width(&self) -> f64 {
        self.connector_width.unwrap_or(self.width)
    }

    /// Validate the joint invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is not positive, the width is
    /// negative, or the fold angle lies outside [0, pi].
    pub fn validate(&self) -> Result<(), JointError> {
        if !(self.length > 0.0) || !self.length.is_finite() {
            return Err(JointError::NonPositiveLength(self.length));
        }
        if self.width < 0.0 || !self.width.is_finite() {
            return Err(JointError::NegativeWidth(self.width));
        }
        if !(0.0..=std::f64::consts::PI).contains(&self.max_angle) {
            return Err(JointError::AngleOutOfRange(self.max_angle));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_horizontal() {
        let j = Joint::horizontal(Point2::new(10.0, 5.0), 80.0, 2.0);
        let m = j.midpoint();
        assert!((m.x - 50.0).abs() < f64::EPSILON);
        assert!((m.y - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn midpoint_vertical() {
        let j = Joint::vertical(Point2::new(10.0, 5.0), 80.0, 2.0);
        let m = j.midpoint();
        assert!((m.x - 10.0).abs() < f64::EPSILON);
        assert!((m.y - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_zero_length() {
        let j = Joint::horizontal(Point2::origin(), 0.0, 2.0);
        assert!(j.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_width() {
        let j = Joint::horizontal(Point2::origin(), 10.0, -1.0);
        assert!(j.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_angle() {
        let j = Joint::horizontal(Point2::origin(), 10.0, 2.0).with_max_angle(4.0);
        assert!(j.validate().is_err());
    }

    #[test]
    fn effective_width_prefers_override() {
        let mut j = Joint::horizontal(Point2::origin(), 10.0, 2.0);
        assert!((j.effective_width() - 2.0).abs() < f64::EPSILON);
        j.connector_width = Some(5.0);
        assert!((j.effective_width() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn direction_sign() {
        assert!((FoldDirection::Positive.sign() - 1.0).abs() < f64::EPSILON);
        assert!((FoldDirection::Negative.sign() + 1.0).abs() < f64::EPSILON);
    }
}
