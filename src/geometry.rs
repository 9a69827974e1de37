//! Pitch and center-distance math for external spur gears of matching module.

use crate::float_types::Real;
use crate::gear::Gear;
use nalgebra::{Point2, Vector2};

/// `num_teeth * module_mm`
#[inline]
pub fn compute_pitch_diameter(num_teeth: u32, module_mm: Real) -> Real {
    num_teeth as Real * module_mm
}

/// Meshing center distance of two external gears: the sum of their pitch radii.
///
/// Depends only on teeth and module, never on where the gears currently sit.
#[inline]
pub fn compute_center_distance(first: &Gear, second: &Gear) -> Real {
    (first.pitch_diameter() + second.pitch_diameter()) / 2.0
}

/// Where `second` has to go to mesh with `first` along `angle_deg`.
///
/// The angle follows the usual convention: 0° is +x, counter-clockwise positive.
/// The result is measured from `first`'s current center. `second` is not moved;
/// apply the point with [`Gear::set_center`].
///
/// # Example
/// ```
/// use gearlayout::{Gear, geometry::place_second_gear};
///
/// let driver = Gear::new("driver", 20, 0.5);
/// let driven = Gear::new("driven", 40, 0.5);
/// let p = place_second_gear(&driver, &driven, 90.0);
/// assert!(p.x.abs() < 1e-9 && (p.y - 15.0).abs() < 1e-9);
/// ```
pub fn place_second_gear(first: &Gear, second: &Gear, angle_deg: Real) -> Point2<Real> {
    let distance = compute_center_distance(first, second);
    let angle_rad = angle_deg.to_radians();
    first.center + Vector2::new(angle_rad.cos(), angle_rad.sin()) * distance
}
