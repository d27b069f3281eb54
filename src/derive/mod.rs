//! Geometry derivation for standard-form conics.
//!
//! Turns a [`ParsedConic`] into every named feature of the curve. All values
//! are kept at full precision; rounding is left to the report.

use crate::equation::{ConicKind, EquationForm, ParsedConic};
use crate::gp::{Elips2d, Hypr2d, ImplicitConic, Lin2d, Orientation, Pnt2d};
use crate::precision;
use serde::{Deserialize, Serialize};

/// The curve itself, as a geometric primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    Ellipse(Elips2d),
    Hyperbola(Hypr2d),
}

impl Curve {
    /// Implicit form of the curve.
    pub fn implicit(&self) -> ImplicitConic {
        match self {
            Curve::Ellipse(e) => ImplicitConic::from_ellipse(e),
            Curve::Hyperbola(h) => ImplicitConic::from_hyperbola(h),
        }
    }
}

/// Chords through the foci perpendicular to the principal axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatusRectum {
    /// b²/a
    pub half_length: f64,
    /// 2b²/a
    pub length: f64,
    /// LR1, LR2 at the first focus, LR3, LR4 at the second; the odd ones on the positive side.
    pub points: [Pnt2d; 4],
}

/// The two directrix lines, `offset` = a/e from the center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Directrices {
    pub offset: f64,
    /// Left/bottom first, then right/top.
    pub lines: [Lin2d; 2],
}

/// Rectangle (h±a, k±b) used to construct the asymptotes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundamentalRectangle {
    pub top_left: Pnt2d,
    pub top_right: Pnt2d,
    pub bottom_right: Pnt2d,
    pub bottom_left: Pnt2d,
}

impl FundamentalRectangle {
    fn around(center: Pnt2d, half_width: f64, half_height: f64) -> Self {
        Self {
            top_left: center.translated(-half_width, half_height),
            top_right: center.translated(half_width, half_height),
            bottom_right: center.translated(half_width, -half_height),
            bottom_left: center.translated(-half_width, -half_height),
        }
    }

    /// Corners in drawing order (clockwise from top-left).
    pub fn corners(&self) -> [Pnt2d; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

/// Features that only a hyperbola has.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HyperbolaFeatures {
    /// b/a opening left/right, a/b opening up/down.
    pub asymptote_slope: f64,
    /// Through the center with slopes +m and -m.
    pub asymptotes: [Lin2d; 2],
    pub fundamental_rectangle: FundamentalRectangle,
    /// `y - k = ±m(x - h)` with signs folded, present only when the center is not the origin.
    pub shifted_form: Option<String>,
}

/// Complete geometric description of a parsed conic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConicGeometry {
    pub kind: ConicKind,
    pub form: EquationForm,
    pub orientation: Orientation,
    /// (h, k)
    pub center: Pnt2d,
    pub a_squared: f64,
    pub b_squared: f64,
    /// a² - b² for an ellipse, a² + b² for a hyperbola.
    pub c_squared: f64,
    /// Semi-major (ellipse) or semi-transverse (hyperbola) axis.
    pub a: f64,
    pub b: f64,
    /// Center-to-focus distance.
    pub c: f64,
    pub eccentricity: f64,
    /// The major/transverse axis line.
    pub principal_axis: Lin2d,
    /// V1 (negative side), V2 (positive side).
    pub vertices: [Pnt2d; 2],
    /// W1, W2
    pub co_vertices: [Pnt2d; 2],
    /// F1, F2
    pub foci: [Pnt2d; 2],
    pub latus_rectum: LatusRectum,
    /// Absent for a circle, whose eccentricity is zero.
    pub directrices: Option<Directrices>,
    pub hyperbola: Option<HyperbolaFeatures>,
    pub curve: Curve,
}

impl ConicGeometry {
    /// Implicit form of the derived curve.
    pub fn implicit(&self) -> ImplicitConic {
        self.curve.implicit()
    }

    /// Full length of the major/transverse axis.
    #[inline]
    pub fn major_axis_length(&self) -> f64 {
        2.0 * self.a
    }

    /// Full length of the minor/conjugate axis.
    #[inline]
    pub fn minor_axis_length(&self) -> f64 {
        2.0 * self.b
    }

    /// Largest of |a|, |b|, |c|; the renderer sizes its viewport from this.
    pub fn max_extent(&self) -> f64 {
        self.a.abs().max(self.b.abs()).max(self.c.abs())
    }
}

/// Derives every geometric feature of the conic.
///
/// Total over valid input: denominators are positive, so a > 0.
pub fn derive(parsed: ParsedConic) -> ConicGeometry {
    let kind = parsed.kind();
    let orientation = parsed.orientation();
    let center = parsed.center();
    let (a_squared, b_squared) = parsed.principal_denominators();

    let a = a_squared.abs().sqrt();
    let b = b_squared.abs().sqrt();

    let (curve, c_squared, c) = match kind {
        ConicKind::Ellipse => {
            // Integer denominators make this difference exact.
            let c_squared = a_squared - b_squared;
            if c_squared < 0.0 {
                tracing::warn!(c_squared, "negative c² clamped through absolute value");
            }
            let ellipse = Elips2d::new(center, a, b, orientation);
            (Curve::Ellipse(ellipse), c_squared, c_squared.abs().sqrt())
        }
        ConicKind::Hyperbola => {
            let hypr = Hypr2d::new(center, a, b, orientation);
            // c² itself may overflow for huge denominators; hypot does not.
            (Curve::Hyperbola(hypr), a_squared + b_squared, hypr.focal_distance())
        }
    };
    let eccentricity = c / a;
    tracing::debug!(%kind, %orientation, a, b, c, "derived conic axes");

    let vertices = [orientation.along(center, -a), orientation.along(center, a)];
    let co_vertices = [orientation.across(center, -b), orientation.across(center, b)];
    let foci = [orientation.along(center, -c), orientation.along(center, c)];

    let half_length = b_squared / a;
    let latus_rectum = LatusRectum {
        half_length,
        length: 2.0 * half_length,
        points: [
            orientation.across(foci[0], half_length),
            orientation.across(foci[0], -half_length),
            orientation.across(foci[1], half_length),
            orientation.across(foci[1], -half_length),
        ],
    };

    // Only an exact circle lacks directrices; a nearly round ellipse keeps them.
    let directrices = if c_squared == 0.0 {
        None
    } else {
        let offset = a / eccentricity;
        Some(Directrices {
            offset,
            lines: [
                orientation.cross_line(center, -offset),
                orientation.cross_line(center, offset),
            ],
        })
    };

    let hyperbola = match &curve {
        Curve::Ellipse(_) => None,
        Curve::Hyperbola(hypr) => Some(hyperbola_features(hypr)),
    };

    ConicGeometry {
        kind,
        form: parsed.form(),
        orientation,
        center,
        a_squared,
        b_squared,
        c_squared,
        a,
        b,
        c,
        eccentricity,
        principal_axis: orientation.principal_axis(center),
        vertices,
        co_vertices,
        foci,
        latus_rectum,
        directrices,
        hyperbola,
        curve,
    }
}

fn hyperbola_features(hypr: &Hypr2d) -> HyperbolaFeatures {
    let center = hypr.center();
    let slope = hypr.asymptote_slope();
    let shifted_form = if center.is_origin() {
        None
    } else {
        Some(format!(
            "{} = ±{}({})",
            precision::format_offset("y", center.y()),
            precision::format_display(slope),
            precision::format_offset("x", center.x()),
        ))
    };

    HyperbolaFeatures {
        asymptote_slope: slope,
        asymptotes: [
            Lin2d::from_point_slope(center, slope),
            Lin2d::from_point_slope(center, -slope),
        ],
        // Width 2a and height 2b whichever way the hyperbola opens.
        fundamental_rectangle: FundamentalRectangle::around(center, hypr.major_radius(), hypr.minor_radius()),
        shifted_form,
    }
}
