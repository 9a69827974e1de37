//! Movement-level context: overall caliber dimensions and arbors.
//!
//! Neither type feeds the gear placement yet; they are the inputs later layout
//! stages (mainplate, bridges, pivots) read.

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::Point2;

/// Overall dimensions and defaults of a movement, all lengths in mm.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementParameters {
    /// Case diameter of the movement.
    pub diameter_mm: Real,
    pub thickness_mm: Real,
    /// Balance frequency, when known.
    pub target_frequency_hz: Option<Real>,
    /// Safety margin kept clear at the mainplate edge.
    pub mainplate_margin_mm: Real,
    /// Module used when a gear does not pick its own, usually 0.2–0.6.
    pub default_module_mm: Real,
}

impl MovementParameters {
    /// Creates parameters with no target frequency and default margin and module.
    pub fn new(diameter_mm: Real, thickness_mm: Real) -> Self {
        Self {
            diameter_mm,
            thickness_mm,
            target_frequency_hz: None,
            mainplate_margin_mm: 1.0,
            default_module_mm: 0.35,
        }
    }

    pub fn with_target_frequency(mut self, hz: Real) -> Self {
        self.target_frequency_hz = Some(hz);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = |v: Real| v.is_finite() && v > 0.0;
        if !positive(self.diameter_mm) {
            return Err(ValidationError::InvalidParameter(format!(
                "diameter_mm must be positive, got {}",
                self.diameter_mm
            )));
        }
        if !positive(self.thickness_mm) {
            return Err(ValidationError::InvalidParameter(format!(
                "thickness_mm must be positive, got {}",
                self.thickness_mm
            )));
        }
        if !(self.mainplate_margin_mm.is_finite() && self.mainplate_margin_mm >= 0.0) {
            return Err(ValidationError::InvalidParameter(format!(
                "mainplate_margin_mm must not be negative, got {}",
                self.mainplate_margin_mm
            )));
        }
        if !positive(self.default_module_mm) {
            return Err(ValidationError::InvalidParameter(format!(
                "default_module_mm must be positive, got {}",
                self.default_module_mm
            )));
        }
        if let Some(hz) = self.target_frequency_hz {
            if !positive(hz) {
                return Err(ValidationError::InvalidParameter(format!(
                    "target_frequency_hz must be positive, got {hz}"
                )));
            }
        }
        Ok(())
    }
}

/// The shaft a wheel pivots on.
#[derive(Debug, Clone, PartialEq)]
pub struct Arbor {
    pub name: String,
    pub position: Point2<Real>,
    pub pivot_diameter_mm: Real,
}

impl Arbor {
    pub fn new(name: impl Into<String>, x: Real, y: Real, pivot_diameter_mm: Real) -> Self {
        Self {
            name: name.into(),
            position: Point2::new(x, y),
            pivot_diameter_mm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = MovementParameters::new(30.0, 5.0);
        assert_eq!(params.target_frequency_hz, None);
        assert_eq!(params.mainplate_margin_mm, 1.0);
        assert_eq!(params.default_module_mm, 0.35);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_catches_bad_values() {
        let mut params = MovementParameters::new(0.0, 5.0);
        assert!(params.validate().is_err());

        params.diameter_mm = 30.0;
        params.mainplate_margin_mm = -1.0;
        assert!(params.validate().is_err());

        params.mainplate_margin_mm = 0.0;
        assert!(params.clone().with_target_frequency(4.0).validate().is_ok());
        assert!(params.with_target_frequency(0.0).validate().is_err());
    }

    #[test]
    fn arbor_position() {
        let arbor = Arbor::new("center", 1.0, -2.0, 0.5);
        assert_eq!(arbor.position, Point2::new(1.0, -2.0));
    }
}
