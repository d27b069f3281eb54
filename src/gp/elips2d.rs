//! 2D axis-aligned ellipse.

use crate::gp::{Orientation, Pnt2d};
use serde::{Deserialize, Serialize};

/// A 2D ellipse defined by center, major/minor radii, and orientation of the major axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Elips2d {
    center: Pnt2d,
    major_radius: f64,
    minor_radius: f64,
    orientation: Orientation,
}

impl Elips2d {
    /// Creates an ellipse with given center, major and minor radii.
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

    /// Returns the major radius.
    #[inline]
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Returns the minor radius.
    #[inline]
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    /// Returns the orientation of the major axis.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the area of the ellipse.
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.major_radius * self.minor_radius
    }

    /// Returns an approximation of the perimeter.
    /// Uses Ramanujan's approximation.
    pub fn perimeter(&self) -> f64 {
        let sum = self.major_radius + self.minor_radius;
        if sum == 0.0 {
            return 0.0;
        }
        let h = (self.major_radius - self.minor_radius).powi(2) / sum.powi(2);
        std::f64::consts::PI * sum * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    /// Point at parameter `u` (radians) of the sweep
    /// x = h + rx·cos u, y = k + ry·sin u.
    pub fn value(&self, u: f64) -> Pnt2d {
        let (rx, ry) = match self.orientation {
            Orientation::Horizontal => (self.major_radius, self.minor_radius),
            Orientation::Vertical => (self.minor_radius, self.major_radius),
        };
        self.center.translated(rx * u.cos(), ry * u.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elips2d_new() {
        let center = Pnt2d::from_coords(1.0, 2.0);
        let ellipse = Elips2d::new(center, 5.0, -3.0, Orientation::Horizontal);
        assert_eq!(ellipse.major_radius(), 5.0);
        assert_eq!(ellipse.minor_radius(), 3.0);
        assert_eq!(ellipse.center(), center);
    }

    #[test]
    fn test_elips2d_area_perimeter() {
        let circle = Elips2d::new(Pnt2d::new(), 2.0, 2.0, Orientation::Horizontal);
        assert!((circle.area() - 4.0 * std::f64::consts::PI).abs() < 1e-10);
        assert!((circle.perimeter() - 4.0 * std::f64::consts::PI).abs() < 1e-10);
    }

    #[test]
    fn test_elips2d_value_vertical() {
        let ellipse = Elips2d::new(Pnt2d::from_coords(1.0, 1.0), 5.0, 3.0, Orientation::Vertical);
        let top = ellipse.value(std::f64::consts::FRAC_PI_2);
        assert!(top.is_equal(&Pnt2d::from_coords(1.0, 6.0), 1e-10));
        let right = ellipse.value(0.0);
        assert!(right.is_equal(&Pnt2d::from_coords(4.0, 1.0), 1e-10));
    }
}
