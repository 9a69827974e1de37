//! An ordered chain of meshing gears.

use crate::collision::circles_overlap;
use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use crate::gear::Gear;
use crate::geometry::place_second_gear;
use geo::MultiPolygon;
use nalgebra::Point2;
use std::ops::Index;
use tracing::{debug, trace};

/// Default angle, in degrees, added between successive placement steps.
pub const DEFAULT_INCREMENT_ANGLE: Real = 180.0;

/// A sequence of gears in mesh order: gear `i` meshes with gear `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct GearTrain {
    gears: Vec<Gear>,
    /// Degrees the placement direction turns after each gear.
    pub increment_angle: Real,
}

impl Default for GearTrain {
    fn default() -> Self {
        Self {
            gears: Vec::new(),
            increment_angle: DEFAULT_INCREMENT_ANGLE,
        }
    }
}

impl GearTrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_increment_angle(mut self, increment_angle: Real) -> Self {
        self.increment_angle = increment_angle;
        self
    }

    /// Appends `gear` at the end of the chain. No de-duplication.
    pub fn add_gear(&mut self, gear: Gear) {
        self.gears.push(gear);
    }

    pub fn gears(&self) -> &[Gear] {
        &self.gears
    }

    /// Mutable access for placing gears by hand; the order stays fixed.
    pub fn gears_mut(&mut self) -> &mut [Gear] {
        &mut self.gears
    }

    pub fn len(&self) -> usize {
        self.gears.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    /// Places the gears one after another as a simple chain.
    ///
    /// Gear 0 goes to `start_pos`. Each following gear is put at its meshing
    /// distance from its predecessor, in the direction `start_angle_deg` for the
    /// first step and turning by `increment_angle` after every step. Only the
    /// immediate predecessor is considered; there is no global solve, so
    /// non-adjacent gears may end up overlapping.
    ///
    /// An empty train is left as is. Calling this twice with the same arguments
    /// gives the same centers.
    ///
    /// # Example
    /// ```
    /// use gearlayout::{Gear, GearTrain};
    /// use nalgebra::Point2;
    ///
    /// let mut train = GearTrain::new();
    /// train.add_gear(Gear::new("G1", 20, 1.0));
    /// train.add_gear(Gear::new("G2", 30, 1.0));
    /// train.add_gear(Gear::new("G3", 40, 1.0));
    /// train.compute_centers_linear_chain(Point2::origin(), 0.0);
    ///
    /// assert!((train[1].center.x - 25.0).abs() < 1e-9);
    /// assert!((train[2].center.x + 10.0).abs() < 1e-9);
    /// ```
    pub fn compute_centers_linear_chain(&mut self, start_pos: Point2<Real>, start_angle_deg: Real) {
        let Some(first) = self.gears.first_mut() else {
            return;
        };
        first.set_center(start_pos.x, start_pos.y);
        debug!(gear = %first.name, x = start_pos.x, y = start_pos.y, "placed chain start");

        let mut current_angle = start_angle_deg;
        for i in 1..self.gears.len() {
            let new_center = place_second_gear(&self.gears[i - 1], &self.gears[i], current_angle);
            let gear = &mut self.gears[i];
            gear.set_center(new_center.x, new_center.y);
            debug!(
                gear = %gear.name,
                x = new_center.x,
                y = new_center.y,
                angle_deg = current_angle,
                "placed gear"
            );
            current_angle += self.increment_angle;
        }
    }

    /// Reports overlapping neighbours, in index order.
    ///
    /// Only pairs `(i, i + 1)` are tested against their bounding circles widened by
    /// `clearance_mm`. Overlaps between non-adjacent gears are not reported; use
    /// [`GearTrain::check_all_collisions`] for those.
    pub fn check_collisions(&self, clearance_mm: Real) -> Vec<(&Gear, &Gear)> {
        let collisions: Vec<(&Gear, &Gear)> = self
            .gears
            .windows(2)
            .filter(|pair| gears_overlap(&pair[0], &pair[1], clearance_mm))
            .map(|pair| (&pair[0], &pair[1]))
            .collect();
        for (a, b) in &collisions {
            trace!(first = %a.name, second = %b.name, "adjacent gears overlap");
        }
        debug!(
            pairs = self.gears.len().saturating_sub(1),
            collisions = collisions.len(),
            clearance_mm,
            "adjacent collision scan"
        );
        collisions
    }

    /// Like [`GearTrain::check_collisions`] but tests every pair `(i, j)` with
    /// `i < j`, reported in lexicographic index order.
    pub fn check_all_collisions(&self, clearance_mm: Real) -> Vec<(&Gear, &Gear)> {
        let mut collisions = Vec::new();
        for (i, a) in self.gears.iter().enumerate() {
            for b in &self.gears[i + 1..] {
                if gears_overlap(a, b, clearance_mm) {
                    trace!(first = %a.name, second = %b.name, "gears overlap");
                    collisions.push((a, b));
                }
            }
        }
        let n = self.gears.len();
        debug!(
            pairs = n * n.saturating_sub(1) / 2,
            collisions = collisions.len(),
            clearance_mm,
            "all-pairs collision scan"
        );
        collisions
    }

    /// Validates every gear in order, then checks that neighbours share a module.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for gear in &self.gears {
            gear.validate()?;
        }
        let eps = tolerance();
        for pair in self.gears.windows(2) {
            if (pair[0].module_mm - pair[1].module_mm).abs() > eps {
                return Err(ValidationError::ModuleMismatch {
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Pitch circles of all gears, in train order, each with `segments` edges.
    pub fn footprint(&self, segments: usize) -> MultiPolygon<Real> {
        MultiPolygon::new(
            self.gears
                .iter()
                .map(|gear| gear.pitch_polygon(segments))
                .collect(),
        )
    }
}

impl Index<usize> for GearTrain {
    type Output = Gear;

    fn index(&self, index: usize) -> &Gear {
        &self.gears[index]
    }
}

fn gears_overlap(a: &Gear, b: &Gear, clearance_mm: Real) -> bool {
    let (center_a, radius_a) = a.bounding_circle();
    let (center_b, radius_b) = b.bounding_circle();
    circles_overlap(&center_a, radius_a, &center_b, radius_b, clearance_mm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn three_gear_train() -> GearTrain {
        let mut train = GearTrain::new();
        train.add_gear(Gear::new("G1", 20, 1.0));
        train.add_gear(Gear::new("G2", 30, 1.0));
        train.add_gear(Gear::new("G3", 40, 1.0));
        train
    }

    #[test]
    fn empty_train_is_a_no_op() {
        let mut train = GearTrain::new();
        train.compute_centers_linear_chain(Point2::new(3.0, 4.0), 45.0);
        assert!(train.is_empty());
        assert!(train.check_collisions(0.0).is_empty());
        assert!(train.check_all_collisions(0.0).is_empty());
    }

    #[test]
    fn single_gear_goes_to_start() {
        let mut train = GearTrain::new();
        train.add_gear(Gear::new("solo", 12, 0.3));
        train.compute_centers_linear_chain(Point2::new(3.0, 4.0), 45.0);
        assert_eq!(train[0].center, Point2::new(3.0, 4.0));
    }

    #[test]
    fn zig_zag_chain() {
        let mut train = three_gear_train();
        assert_eq!(train.increment_angle, DEFAULT_INCREMENT_ANGLE);
        train.compute_centers_linear_chain(Point2::origin(), 0.0);

        assert_eq!(train[0].center, Point2::origin());
        assert_abs_diff_eq!(train[1].center.x, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(train[1].center.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(train[2].center.x, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(train[2].center.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn custom_increment_turns_the_chain() {
        let mut train = three_gear_train().with_increment_angle(90.0);
        train.compute_centers_linear_chain(Point2::origin(), 0.0);
        // G3 sits 35mm above G2
        assert_abs_diff_eq!(train[2].center.x, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(train[2].center.y, 35.0, epsilon = 1e-9);
    }

    #[test]
    fn adjacent_scan_ignores_non_neighbours() {
        let mut train = three_gear_train();
        train.compute_centers_linear_chain(Point2::origin(), 0.0);
        assert!(train.check_collisions(0.0).is_empty());

        let all = train.check_all_collisions(0.0);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].0.name, "G1");
        assert_eq!(all[0].1.name, "G3");
    }

    #[test]
    fn clearance_flags_tangent_neighbours() {
        let mut train = three_gear_train();
        train.compute_centers_linear_chain(Point2::origin(), 0.0);
        assert_eq!(train.check_collisions(0.1).len(), 2);
    }

    #[test]
    fn unplaced_gears_overlap() {
        let train = three_gear_train();
        assert_eq!(train.check_collisions(0.0).len(), 2);
        assert_eq!(train.check_all_collisions(0.0).len(), 3);
    }

    #[test]
    fn validate_reports_module_mismatch() {
        let mut train = three_gear_train();
        assert!(train.validate().is_ok());
        train.add_gear(Gear::new("odd", 10, 0.5));
        assert_eq!(
            train.validate(),
            Err(ValidationError::ModuleMismatch {
                first: "G3".into(),
                second: "odd".into(),
            })
        );
    }
}
