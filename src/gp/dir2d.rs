//! 2D direction vector (unit vector).

use crate::precision;
use serde::{Deserialize, Serialize};

/// A 2D unit direction vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dir2d {
    x: f64,
    y: f64,
}

impl Dir2d {
    /// Direction of the positive X axis.
    pub const X: Dir2d = Dir2d { x: 1.0, y: 0.0 };

    /// Direction of the positive Y axis.
    pub const Y: Dir2d = Dir2d { x: 0.0, y: 1.0 };

    /// Creates a direction from two coordinates (auto-normalized).
    /// Panics if the vector is too small.
    pub fn from_coords(x: f64, y: f64) -> Self {
        let d = (x * x + y * y).sqrt();
        if d <= precision::CONFUSION {
            panic!("Dir2d::from_coords: zero-length direction");
        }
        Self { x: x / d, y: y / d }
    }

    /// Direction of a line with the given slope, pointing towards +X.
    #[inline]
    pub fn from_slope(slope: f64) -> Self {
        Self::from_coords(1.0, slope)
    }

    /// Returns the X component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }
}
