//! 2D line.

use crate::gp::{Dir2d, Pnt2d};
use crate::precision;
use serde::{Deserialize, Serialize};

/// An infinite 2D line defined by a point and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lin2d {
    origin: Pnt2d,
    direction: Dir2d,
}

impl Lin2d {
    /// Creates the line through `origin` with the given slope.
    #[inline]
    pub fn from_point_slope(origin: Pnt2d, slope: f64) -> Self {
        Self { origin, direction: Dir2d::from_slope(slope) }
    }

    /// Creates the vertical line x = `x`.
    #[inline]
    pub fn vertical(x: f64) -> Self {
        Self { origin: Pnt2d::from_coords(x, 0.0), direction: Dir2d::Y }
    }

    /// Creates the horizontal line y = `y`.
    #[inline]
    pub fn horizontal(y: f64) -> Self {
        Self { origin: Pnt2d::from_coords(0.0, y), direction: Dir2d::X }
    }

    /// Returns dy/dx, or `None` for a vertical line.
    pub fn slope(&self) -> Option<f64> {
        if self.direction.x().abs() <= precision::CONFUSION {
            None
        } else {
            Some(self.direction.y() / self.direction.x())
        }
    }

    /// Returns the point at signed distance `t` from the origin.
    #[inline]
    pub fn point_at(&self, t: f64) -> Pnt2d {
        self.origin.translated(self.direction.x() * t, self.direction.y() * t)
    }

    /// Computes the parameter for the closest point on the line to a given point.
    /// The closest point is: origin + parameter * direction
    pub fn parameter(&self, point: Pnt2d) -> f64 {
        (point.x() - self.origin.x()) * self.direction.x() + (point.y() - self.origin.y()) * self.direction.y()
    }

    /// Segment of length 2·`half_length` centered on the foot of `point`.
    pub fn segment_around(&self, point: Pnt2d, half_length: f64) -> (Pnt2d, Pnt2d) {
        let t = self.parameter(point);
        (self.point_at(t - half_length), self.point_at(t + half_length))
    }

    /// Computes the distance from a point to the line.
    pub fn distance(&self, point: Pnt2d) -> f64 {
        let vx = point.x() - self.origin.x();
        let vy = point.y() - self.origin.y();
        (self.direction.x() * vy - self.direction.y() * vx).abs()
    }

    /// Checks if a point lies on the line within tolerance.
    pub fn contains(&self, point: Pnt2d, tolerance: f64) -> bool {
        self.distance(point) <= tolerance
    }

    /// Clips the line to the axis-aligned box spanned by `min` and `max`.
    ///
    /// Returns the entry and exit points, or `None` when the line misses the box.
    pub fn clipped(&self, min: Pnt2d, max: Pnt2d) -> Option<(Pnt2d, Pnt2d)> {
        let mut t_lo = f64::NEG_INFINITY;
        let mut t_hi = f64::INFINITY;

        let axes = [
            (self.origin.x(), self.direction.x(), min.x(), max.x()),
            (self.origin.y(), self.direction.y(), min.y(), max.y()),
        ];
        for (o, d, lo, hi) in axes {
            if d.abs() <= precision::CONFUSION {
                // Parallel to this slab
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            t_lo = t_lo.max(t1.min(t2));
            t_hi = t_hi.min(t1.max(t2));
        }

        if t_lo > t_hi {
            return None;
        }
        Some((self.point_at(t_lo), self.point_at(t_hi)))
    }
}
