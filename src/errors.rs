//! Validation errors
//!
//! The layout operations themselves never fail; these errors come only from the
//! opt-in `validate` methods on [`Gear`](crate::Gear), [`GearTrain`](crate::GearTrain)
//! and [`MovementParameters`](crate::MovementParameters).

use crate::float_types::Real;
use nalgebra::Point2;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A gear has zero teeth
    #[error("(NonPositiveTeeth) gear '{name}' has no teeth")]
    NonPositiveTeeth { name: String },
    /// A gear module is zero, negative, NaN or infinite
    #[error("(NonPositiveModule) gear '{name}' has module {module_mm} mm")]
    NonPositiveModule { name: String, module_mm: Real },
    /// A gear thickness is zero, negative, NaN or infinite
    #[error("(NonPositiveThickness) gear '{name}' has thickness {thickness_mm} mm")]
    NonPositiveThickness { name: String, thickness_mm: Real },
    /// The center has a NaN or infinite coordinate
    #[error("(InvalidCoordinate) gear '{name}' has center ({}, {})", .center.x, .center.y)]
    InvalidCoordinate { name: String, center: Point2<Real> },
    /// Two neighbours in a train have different modules and cannot mesh
    #[error("(ModuleMismatch) gears '{first}' and '{second}' have different modules")]
    ModuleMismatch { first: String, second: String },
    /// A movement parameter is out of range
    #[error("(InvalidParameter) {0}")]
    InvalidParameter(String),
}
