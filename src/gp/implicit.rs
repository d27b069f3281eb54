//! Implicit (general quadratic) form of a conic.
//!
//! A x² + B xy + C y² + D x + E y + F = 0, stored with the denominators
//! cleared so that standard-form inputs with integer data give integer
//! coefficients. The homogeneous matrix form is
//!
//! ```text
//!     | A    B/2  D/2 |
//! Q = | B/2  C    E/2 |      x^T Q x = 0,  x = (x, y, 1)
//!     | D/2  E/2  F   |
//! ```

use crate::gp::{Elips2d, Hypr2d, Orientation, Pnt2d};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// General quadratic coefficients plus the scale that maps them back to standard form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImplicitConic {
    coeffs: [f64; 6],
    /// a²·b²; dividing `evaluate` by this gives the standard-form residual (lhs - 1).
    scale: f64,
}

impl ImplicitConic {
    /// sx·(x-h)² + sy·(y-k)² + s0 = 0 expanded.
    fn from_axis_aligned(center: Pnt2d, sx: f64, sy: f64, s0: f64) -> Self {
        let (h, k) = center.coords();
        let coeffs = [
            sx,
            0.0,
            sy,
            -2.0 * h * sx,
            -2.0 * k * sy,
            sx * h * h + sy * k * k + s0,
        ];
        Self { coeffs, scale: s0.abs() }
    }

    /// (x-h)²/rx² + (y-k)²/ry² = 1 multiplied through by rx²·ry².
    pub fn from_ellipse(ellipse: &Elips2d) -> Self {
        let a2 = ellipse.major_radius().powi(2);
        let b2 = ellipse.minor_radius().powi(2);
        let (rx2, ry2) = match ellipse.orientation() {
            Orientation::Horizontal => (a2, b2),
            Orientation::Vertical => (b2, a2),
        };
        Self::from_axis_aligned(ellipse.center(), ry2, rx2, -a2 * b2)
    }

    /// (x-h)²/a² - (y-k)²/b² = 1 (or the y-first form) multiplied through by a²·b².
    pub fn from_hyperbola(hyperbola: &Hypr2d) -> Self {
        let a2 = hyperbola.major_radius().powi(2);
        let b2 = hyperbola.minor_radius().powi(2);
        match hyperbola.orientation() {
            Orientation::Horizontal => Self::from_axis_aligned(hyperbola.center(), b2, -a2, -a2 * b2),
            Orientation::Vertical => Self::from_axis_aligned(hyperbola.center(), -a2, b2, -a2 * b2),
        }
    }

    /// Returns [A, B, C, D, E, F].
    #[inline]
    pub fn coefficients(&self) -> [f64; 6] {
        self.coeffs
    }

    /// Symmetric homogeneous matrix of the conic.
    pub fn matrix(&self) -> Matrix3<f64> {
        let [a, b, c, d, e, f] = self.coeffs;
        Matrix3::new(
            a, b / 2.0, d / 2.0,
            b / 2.0, c, e / 2.0,
            d / 2.0, e / 2.0, f,
        )
    }

    /// Value of the quadratic form at `point`.
    pub fn evaluate(&self, point: Pnt2d) -> f64 {
        let p = Vector3::new(point.x(), point.y(), 1.0);
        p.dot(&(self.matrix() * p))
    }

    /// Standard-form residual: lhs - 1 of the standard-form equation.
    pub fn residual(&self, point: Pnt2d) -> f64 {
        if self.scale == 0.0 {
            return self.evaluate(point);
        }
        self.evaluate(point) / self.scale
    }

    /// Checks if a point lies on the curve within a standard-form tolerance.
    pub fn contains(&self, point: Pnt2d, tolerance: f64) -> bool {
        self.residual(point).abs() <= tolerance
    }
}
