//! Human-readable report of a derived conic.
//!
//! One [`ReportEntry`] per displayed quantity, grouped by [`Section`]. This is
//! the only place numbers are rounded.

use crate::derive::{ConicGeometry, Curve, HyperbolaFeatures};
use crate::equation::ConicKind;
use crate::gp::{Orientation, Pnt2d};
use crate::precision::{format_compact, format_display, format_exact};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Group a report entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    EquationType,
    Center,
    PrincipalAxis,
    Vertices,
    CoVertices,
    Foci,
    AxisLengths,
    LatusRectum,
    Eccentricity,
    Directrices,
    /// Area and perimeter, ellipses only.
    Measurements,
    Asymptotes,
    FundamentalRectangle,
    GeneralForm,
}

/// A labeled value, e.g. `V1` / `(-5.00, 0.00)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub section: Section,
    pub label: String,
    pub value: String,
}

/// Ordered list of labeled quantities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Builds the full report for a derived conic.
    pub fn from_geometry(g: &ConicGeometry) -> Self {
        let mut report = Report::default();
        let is_ellipse = g.kind == ConicKind::Ellipse;

        report.push(Section::EquationType, "Equation Type", format!("{} ({})", g.kind, g.orientation));
        report.push(
            Section::Center,
            "Center (h, k)",
            format!("({}, {})", format_exact(g.center.x()), format_exact(g.center.y())),
        );
        report.push(
            Section::PrincipalAxis,
            if is_ellipse { "Principal Axis" } else { "Transverse Axis" },
            principal_axis_text(g),
        );

        report.push_point(Section::Vertices, "V1", g.vertices[0]);
        report.push_point(Section::Vertices, "V2", g.vertices[1]);
        report.push_point(Section::CoVertices, "W1", g.co_vertices[0]);
        report.push_point(Section::CoVertices, "W2", g.co_vertices[1]);
        report.push_point(Section::Foci, "F1", g.foci[0]);
        report.push_point(Section::Foci, "F2", g.foci[1]);
        report.push(Section::Foci, "Distance from center to focus (c)", format_display(g.c));
        let (formula, op) = if is_ellipse { ("a² - b²", "-") } else { ("a² + b²", "+") };
        report.push(
            Section::Foci,
            "c",
            format!("√({}) = √({}² {} {}²)", formula, format_compact(g.a), op, format_compact(g.b)),
        );

        let (major, minor) = if is_ellipse {
            ("Major Axis Length", "Minor Axis Length")
        } else {
            ("Transverse Axis Length", "Conjugate Axis Length")
        };
        report.push(
            Section::AxisLengths,
            major,
            format!("{} (a = {})", format_display(g.major_axis_length()), format_compact(g.a)),
        );
        report.push(
            Section::AxisLengths,
            minor,
            format!("{} (b = {})", format_display(g.minor_axis_length()), format_compact(g.b)),
        );

        report.push(Section::LatusRectum, "Latus Rectum Length", format_display(g.latus_rectum.length));
        for (i, p) in g.latus_rectum.points.iter().enumerate() {
            report.push_point(Section::LatusRectum, &format!("LR{}", i + 1), *p);
        }

        report.push(Section::Eccentricity, "Eccentricity", format_display(g.eccentricity));
        report.push(Section::Directrices, "Directrices", directrices_text(g));

        if let Curve::Ellipse(ellipse) = &g.curve {
            report.push(Section::Measurements, "Area", format_display(ellipse.area()));
            report.push(Section::Measurements, "Perimeter (approx.)", format_display(ellipse.perimeter()));
        }

        if let Some(hyp) = &g.hyperbola {
            report.push_hyperbola(g, hyp);
        }

        report.push(Section::GeneralForm, "General Form", general_form_text(&g.implicit().coefficients()));
        report
    }

    fn push(&mut self, section: Section, label: &str, value: String) {
        self.entries.push(ReportEntry { section, label: label.to_string(), value });
    }

    fn push_point(&mut self, section: Section, label: &str, p: Pnt2d) {
        self.push(section, label, format_point(p));
    }

    fn push_hyperbola(&mut self, g: &ConicGeometry, hyp: &HyperbolaFeatures) {
        // Rise over run as written in the equation: b/a or a/b.
        let (rise, run) = match g.orientation {
            Orientation::Horizontal => (g.b, g.a),
            Orientation::Vertical => (g.a, g.b),
        };
        let fraction = format!("{}/{}", format_compact(rise), format_compact(run));
        self.push(Section::Asymptotes, "Asymptotes", format!("y = ±{}x", fraction));
        self.push(Section::Asymptotes, "Asymptote (+)", format!("y = +{}x", fraction));
        self.push(Section::Asymptotes, "Asymptote (-)", format!("y = -{}x", fraction));
        self.push(Section::Asymptotes, "Slope", format_display(hyp.asymptote_slope));
        if let Some(shifted) = &hyp.shifted_form {
            self.push(Section::Asymptotes, "Shifted Form", shifted.clone());
        }

        let rect = &hyp.fundamental_rectangle;
        self.push_point(Section::FundamentalRectangle, "Top-Left", rect.top_left);
        self.push_point(Section::FundamentalRectangle, "Top-Right", rect.top_right);
        self.push_point(Section::FundamentalRectangle, "Bottom-Left", rect.bottom_left);
        self.push_point(Section::FundamentalRectangle, "Bottom-Right", rect.bottom_right);
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Value of the first entry with this label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.value.as_str())
    }

    /// Entries belonging to one section.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(move |e| e.section == section)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.label, entry.value)?;
        }
        Ok(())
    }
}

/// "(x.xx, y.yy)"
pub fn format_point(p: Pnt2d) -> String {
    format!("({}, {})", format_display(p.x()), format_display(p.y()))
}

fn principal_axis_text(g: &ConicGeometry) -> String {
    let line = match g.orientation {
        Orientation::Horizontal => format!("y = {}", format_exact(g.center.y())),
        Orientation::Vertical => format!("x = {}", format_exact(g.center.x())),
    };
    let detail = match (g.kind, g.orientation) {
        (ConicKind::Ellipse, o) => format!("Major axis along {}", o.axis_name()),
        (ConicKind::Hyperbola, Orientation::Horizontal) => "Opens left/right".to_string(),
        (ConicKind::Hyperbola, Orientation::Vertical) => "Opens up/down".to_string(),
    };
    format!("{} ({}) - {}", g.orientation, line, detail)
}

fn directrices_text(g: &ConicGeometry) -> String {
    let Some(d) = &g.directrices else {
        return "none (circle)".to_string();
    };
    let (var, base) = match g.orientation {
        Orientation::Horizontal => ("x", g.center.x()),
        Orientation::Vertical => ("y", g.center.y()),
    };
    format!(
        "{} = {}, {} = {}",
        var,
        format_display(base - d.offset),
        var,
        format_display(base + d.offset),
    )
}

/// "9x² + 25y² - 225 = 0"; zero terms are dropped and unit coefficients elided.
fn general_form_text(coeffs: &[f64; 6]) -> String {
    const TERMS: [&str; 6] = ["x²", "xy", "y²", "x", "y", ""];
    let mut out = String::new();
    for (coeff, term) in coeffs.iter().zip(TERMS) {
        let magnitude = format_compact(coeff.abs());
        if magnitude == "0" {
            continue;
        }
        let negative = *coeff < 0.0;
        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        if magnitude != "1" || term.is_empty() {
            out.push_str(&magnitude);
        }
        out.push_str(term);
    }
    if out.is_empty() {
        out.push('0');
    }
    out.push_str(" = 0");
    out
}
