//! 2D axis-aligned hyperbola.

use crate::gp::{Orientation, Pnt2d};
use serde::{Deserialize, Serialize};

/// One of the two branches of a hyperbola.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    /// Right branch (horizontal) or upper branch (vertical).
    Positive,
    /// Left branch (horizontal) or lower branch (vertical).
    Negative,
}

/// A 2D hyperbola defined by center, semi-transverse and semi-conjugate axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hypr2d {
    center: Pnt2d,
    major_radius: f64,
    minor_radius: f64,
    orientation: Orientation,
}

impl Hypr2d {
    /// Creates a hyperbola with given center, semi-transverse and semi-conjugate axes.
    #[inline]
    pub fn new(center: Pnt2d, major_radius: f64, minor_radius: f64, orientation: Orientation) -> Self {
        Self {
            center,
            major_radius: major_radius.abs(),
            minor_radius: minor_radius.abs(),
            orientation,
        }
    }

    /// Returns the center.
    #[inline]
    pub fn center(&self) -> Pnt2d {
        self.center
    }

    /// Returns the semi-transverse axis (distance from center to vertex).
    #[inline]
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Returns the semi-conjugate axis.
    #[inline]
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    /// Returns the orientation of the transverse axis.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the distance from center to focus, sqrt(a² + b²) without overflow.
    #[inline]
    pub fn focal_distance(&self) -> f64 {
        self.major_radius.hypot(self.minor_radius)
    }

    /// Absolute slope of the asymptotes: b/a opening left/right, a/b opening up/down.
    pub fn asymptote_slope(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.minor_radius / self.major_radius,
            Orientation::Vertical => self.major_radius / self.minor_radius,
        }
    }

    /// Point at parameter `u` on the given branch.
    ///
    /// Horizontal: x = h ± a·cosh u, y = k ± b·sinh u.
    /// Vertical: x = h ± b·sinh u, y = k ± a·cosh u.
    pub fn value(&self, u: f64, branch: Branch) -> Pnt2d {
        let sign = match branch {
            Branch::Positive => 1.0,
            Branch::Negative => -1.0,
        };
        let along = sign * self.major_radius * u.cosh();
        let across = sign * self.minor_radius * u.sinh();
        match self.orientation {
            Orientation::Horizontal => self.center.translated(along, across),
            Orientation::Vertical => self.center.translated(across, along),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypr2d_new() {
        let center = Pnt2d::from_coords(1.0, 2.0);
        let hyperbola = Hypr2d::new(center, 3.0, 4.0, Orientation::Vertical);
        assert_eq!(hyperbola.major_radius(), 3.0);
        assert_eq!(hyperbola.minor_radius(), 4.0);
        assert_eq!(hyperbola.orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_hypr2d_focal_distance() {
        let hyperbola = Hypr2d::new(Pnt2d::new(), 3.0, 4.0, Orientation::Horizontal);
        assert!((hyperbola.focal_distance() - 5.0).abs() < 1e-10); // 3-4-5 triangle
    }

    #[test]
    fn test_hypr2d_focal_distance_huge_radii() {
        let r = 1e200;
        let hyperbola = Hypr2d::new(Pnt2d::new(), r, r, Orientation::Horizontal);
        let c = hyperbola.focal_distance();
        assert!(c.is_finite());
        assert!((c / r - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_hypr2d_asymptote_slope() {
        let h = Hypr2d::new(Pnt2d::new(), 2.0, 3.0, Orientation::Horizontal);
        assert!((h.asymptote_slope() - 1.5).abs() < 1e-10);
        let v = Hypr2d::new(Pnt2d::new(), 3.0, 4.0, Orientation::Vertical);
        assert!((v.asymptote_slope() - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_hypr2d_value_at_vertex() {
        let h = Hypr2d::new(Pnt2d::from_coords(1.0, -2.0), 2.0, 3.0, Orientation::Horizontal);
        assert!(h.value(0.0, Branch::Positive).is_equal(&Pnt2d::from_coords(3.0, -2.0), 1e-10));
        assert!(h.value(0.0, Branch::Negative).is_equal(&Pnt2d::from_coords(-1.0, -2.0), 1e-10));

        let v = Hypr2d::new(Pnt2d::new(), 3.0, 4.0, Orientation::Vertical);
        assert!(v.value(0.0, Branch::Negative).is_equal(&Pnt2d::from_coords(0.0, -3.0), 1e-10));
    }
}
