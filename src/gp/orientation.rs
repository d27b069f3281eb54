//! Orientation of an axis-aligned conic.
//!
//! Every placement rule in the deriver is written once in terms of
//! "along the principal axis" and "across it"; this type maps those two
//! directions onto X and Y.

use crate::gp::{Lin2d, Pnt2d};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the major (ellipse) or transverse (hyperbola) axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Principal axis parallel to the X axis.
    Horizontal,
    /// Principal axis parallel to the Y axis.
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// Point at signed distance `d` from `center` along the principal axis.
    #[inline]
    pub fn along(self, center: Pnt2d, d: f64) -> Pnt2d {
        match self {
            Orientation::Horizontal => center.translated(d, 0.0),
            Orientation::Vertical => center.translated(0.0, d),
        }
    }

    /// Point at signed distance `d` from `center` perpendicular to the principal axis.
    #[inline]
    pub fn across(self, center: Pnt2d, d: f64) -> Pnt2d {
        match self {
            Orientation::Horizontal => center.translated(0.0, d),
            Orientation::Vertical => center.translated(d, 0.0),
        }
    }

    /// The principal axis itself: y = k when horizontal, x = h when vertical.
    pub fn principal_axis(self, center: Pnt2d) -> Lin2d {
        match self {
            Orientation::Horizontal => Lin2d::horizontal(center.y()),
            Orientation::Vertical => Lin2d::vertical(center.x()),
        }
    }

    /// Line perpendicular to the principal axis, `offset` away from the center.
    pub fn cross_line(self, center: Pnt2d, offset: f64) -> Lin2d {
        match self {
            Orientation::Horizontal => Lin2d::vertical(center.x() + offset),
            Orientation::Vertical => Lin2d::horizontal(center.y() + offset),
        }
    }

    /// Name of the coordinate axis the principal axis runs along.
    pub fn axis_name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "x-axis",
            Orientation::Vertical => "y-axis",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "Horizontal"),
            Orientation::Vertical => write!(f, "Vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_along_and_across() {
        let c = Pnt2d::from_coords(1.0, -2.0);
        assert_eq!(Orientation::Horizontal.along(c, 3.0).coords(), (4.0, -2.0));
        assert_eq!(Orientation::Horizontal.across(c, 3.0).coords(), (1.0, 1.0));
        assert_eq!(Orientation::Vertical.along(c, 3.0).coords(), (1.0, 1.0));
        assert_eq!(Orientation::Vertical.across(c, -3.0).coords(), (-2.0, -2.0));
    }

    #[test]
    fn test_principal_axis_and_cross_line() {
        let c = Pnt2d::from_coords(1.0, -2.0);
        let axis = Orientation::Horizontal.principal_axis(c);
        assert!(axis.contains(Pnt2d::from_coords(100.0, -2.0), 1e-10));

        let cross = Orientation::Vertical.cross_line(c, 4.0);
        assert_eq!(cross.slope(), Some(0.0));
        assert!(cross.contains(Pnt2d::from_coords(-9.0, 2.0), 1e-10));
    }

    #[test]
    fn test_display() {
        assert_eq!(Orientation::Horizontal.to_string(), "Horizontal");
        assert_eq!(Orientation::Vertical.axis_name(), "y-axis");
    }
}
