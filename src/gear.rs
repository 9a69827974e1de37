//! The `Gear` value type.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU, tolerance};
use crate::geometry::compute_center_distance;
use geo::{LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// Default face thickness of a movement wheel, in mm.
pub const DEFAULT_THICKNESS_MM: Real = 0.9;

/// One spur gear of a movement: tooth count, module and its placement in the plane.
///
/// Pitch diameter and radius are derived from `num_teeth` and `module_mm` on every
/// call, so editing either field keeps them consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Gear {
    /// Label used in collision reports. Not required to be unique.
    pub name: String,
    pub num_teeth: u32,
    /// Pitch module in mm.
    pub module_mm: Real,
    pub thickness_mm: Real,
    /// Position of the gear axis in mm. Change it with [`Gear::set_center`].
    pub center: Point2<Real>,
    /// Rotational orientation in degrees. Not used by placement or collision checks.
    pub angle_deg: Real,
}

impl Gear {
    /// Creates a gear at the origin with default thickness and zero angle.
    ///
    /// Nothing is validated here; see [`Gear::validate`].
    ///
    /// # Example
    /// ```
    /// use gearlayout::Gear;
    ///
    /// let wheel = Gear::new("center wheel", 80, 0.2);
    /// assert!((wheel.pitch_diameter() - 16.0).abs() < 1e-9);
    /// ```
    pub fn new(name: impl Into<String>, num_teeth: u32, module_mm: Real) -> Self {
        Self {
            name: name.into(),
            num_teeth,
            module_mm,
            thickness_mm: DEFAULT_THICKNESS_MM,
            center: Point2::origin(),
            angle_deg: 0.0,
        }
    }

    pub fn with_thickness(mut self, thickness_mm: Real) -> Self {
        self.thickness_mm = thickness_mm;
        self
    }

    pub fn with_center(mut self, x: Real, y: Real) -> Self {
        self.set_center(x, y);
        self
    }

    pub fn with_angle(mut self, angle_deg: Real) -> Self {
        self.angle_deg = angle_deg;
        self
    }

    /// `num_teeth * module_mm`
    #[inline]
    pub fn pitch_diameter(&self) -> Real {
        self.num_teeth as Real * self.module_mm
    }

    #[inline]
    pub fn radius(&self) -> Real {
        self.pitch_diameter() / 2.0
    }

    /// Center and pitch radius.
    ///
    /// A conservative collision proxy: addendum and dedendum are ignored, so this
    /// is the pitch circle rather than a tooth-tip boundary.
    #[inline]
    pub fn bounding_circle(&self) -> (Point2<Real>, Real) {
        (self.center, self.radius())
    }

    /// Overwrites the center unconditionally.
    #[inline]
    pub fn set_center(&mut self, x: Real, y: Real) {
        self.center = Point2::new(x, y);
    }

    /// Standard addendum, equal to the module.
    #[inline]
    pub const fn addendum_mm(&self) -> Real {
        self.module_mm
    }

    /// Tip diameter for standard tooth proportions: pitch diameter plus two addenda.
    #[inline]
    pub fn outside_diameter(&self) -> Real {
        self.pitch_diameter() + 2.0 * self.addendum_mm()
    }

    /// Returns `true` when `other` has the same module and sits at the meshing
    /// center distance from `self`, both within [`tolerance`].
    pub fn meshes_with(&self, other: &Gear) -> bool {
        let eps = tolerance();
        if (self.module_mm - other.module_mm).abs() > eps {
            return false;
        }
        let actual = nalgebra::distance(&self.center, &other.center);
        (actual - compute_center_distance(self, other)).abs() <= eps
    }

    /// Checks that teeth, module and thickness are positive and the center is finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.num_teeth == 0 {
            return Err(ValidationError::NonPositiveTeeth {
                name: self.name.clone(),
            });
        }
        if !(self.module_mm.is_finite() && self.module_mm > 0.0) {
            return Err(ValidationError::NonPositiveModule {
                name: self.name.clone(),
                module_mm: self.module_mm,
            });
        }
        if !(self.thickness_mm.is_finite() && self.thickness_mm > 0.0) {
            return Err(ValidationError::NonPositiveThickness {
                name: self.name.clone(),
                thickness_mm: self.thickness_mm,
            });
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(ValidationError::InvalidCoordinate {
                name: self.name.clone(),
                center: self.center,
            });
        }
        Ok(())
    }

    /// Pitch circle as a closed polygon with `segments` edges around `center`.
    ///
    /// Returns an empty polygon when `segments < 3`.
    pub fn pitch_polygon(&self, segments: usize) -> GeoPolygon<Real> {
        if segments < 3 {
            return GeoPolygon::new(LineString::new(vec![]), vec![]);
        }
        let r = self.radius();
        let (cx, cy) = (self.center.x, self.center.y);
        let mut coords: Vec<(Real, Real)> = (0..segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (segments as Real);
                (cx + r * theta.cos(), cy + r * theta.sin())
            })
            .collect();
        // close it
        let first = coords[0];
        coords.push(first);
        GeoPolygon::new(LineString::from(coords), vec![])
    }
}
