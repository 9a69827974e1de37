//! Circle overlap test used as a rough gear-footprint collision check.

use crate::float_types::Real;
use nalgebra::Point2;

/// Returns `true` when two circles overlap, with `clearance` added to the
/// combined radius as a required minimum gap.
///
/// The comparison is strict: circles that exactly touch do not overlap.
/// Pass `0.0` for no clearance.
///
/// # Example
/// ```
/// use gearlayout::collision::circles_overlap;
/// use nalgebra::Point2;
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(20.0, 0.0);
/// assert!(!circles_overlap(&a, 10.0, &b, 10.0, 0.0));
/// assert!(circles_overlap(&a, 10.0, &b, 10.0, 0.5));
/// ```
#[inline]
pub fn circles_overlap(
    center_a: &Point2<Real>,
    radius_a: Real,
    center_b: &Point2<Real>,
    radius_b: Real,
    clearance: Real,
) -> bool {
    nalgebra::distance(center_a, center_b) < radius_a + radius_b + clearance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: Real) -> Point2<Real> {
        Point2::new(x, 0.0)
    }

    #[test]
    fn overlapping() {
        assert!(circles_overlap(&at(0.0), 10.0, &at(10.0), 10.0, 0.0));
    }

    #[test]
    fn separate() {
        assert!(!circles_overlap(&at(0.0), 5.0, &at(15.0), 5.0, 0.0));
    }

    #[test]
    fn touching_is_not_overlap() {
        assert!(!circles_overlap(&at(0.0), 10.0, &at(20.0), 10.0, 0.0));
    }

    #[test]
    fn clearance_widens_the_test() {
        assert!(!circles_overlap(&at(0.0), 5.0, &at(11.0), 5.0, 0.0));
        assert!(circles_overlap(&at(0.0), 5.0, &at(11.0), 5.0, 2.0));
    }

    #[test]
    fn symmetric() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        for clearance in [0.0, 0.5, 3.0] {
            assert_eq!(
                circles_overlap(&a, 2.0, &b, 2.5, clearance),
                circles_overlap(&b, 2.5, &a, 2.0, clearance)
            );
        }
    }
}
