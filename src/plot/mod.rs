//! Plot scene construction for derived conics.
//!
//! Produces a renderer-agnostic [`Scene`]: sampled curve polylines, labeled
//! markers, guide segments and the viewport. Any drawing surface (a canvas,
//! an SVG writer, a GPU board) only has to walk these lists.
//!
//! The scene is an owned value. Rebuilding for a new equation replaces it
//! wholesale; nothing is patched in place.

use crate::derive::{ConicGeometry, Curve};
use crate::gp::{Branch, Pnt2d};
use crate::{ConicError, Result as ConicResult};
use serde::{Deserialize, Serialize};

/// Plot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Half extent of the viewport before anything is plotted.
    pub default_half_extent: f64,
    /// Viewport half extent = padding × max(|a|, |b|, |c|).
    pub viewport_padding: f64,
    /// Samples in the closed ellipse sweep over [0, 2π).
    pub ellipse_samples: usize,
    /// Samples per hyperbola branch.
    pub hyperbola_samples: usize,
    /// Hyperbola branches are swept over t ∈ [-limit, limit].
    pub hyperbola_parameter_limit: f64,
    /// Half length of the drawn directrix segments.
    pub guide_half_length: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            default_half_extent: 10.0,
            viewport_padding: 1.5,
            ellipse_samples: 256,
            hyperbola_samples: 128,
            hyperbola_parameter_limit: 2.0,
            guide_half_length: 10.0,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> ConicResult<Self> {
        let config: PlotConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_viewport_padding(mut self, padding: f64) -> Self {
        self.viewport_padding = padding;
        self
    }

    pub fn with_samples(mut self, ellipse: usize, hyperbola: usize) -> Self {
        self.ellipse_samples = ellipse;
        self.hyperbola_samples = hyperbola;
        self
    }

    pub fn with_hyperbola_parameter_limit(mut self, limit: f64) -> Self {
        self.hyperbola_parameter_limit = limit;
        self
    }

    pub fn with_guide_half_length(mut self, half_length: f64) -> Self {
        self.guide_half_length = half_length;
        self
    }

    /// Rejects non-finite or non-positive lengths and sample counts below 3 / 2.
    pub fn validate(&self) -> ConicResult<()> {
        let lengths = [
            ("default_half_extent", self.default_half_extent),
            ("viewport_padding", self.viewport_padding),
            ("hyperbola_parameter_limit", self.hyperbola_parameter_limit),
            ("guide_half_length", self.guide_half_length),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConicError::InvalidConfig(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.ellipse_samples < 3 {
            return Err(ConicError::InvalidConfig(format!(
                "ellipse_samples must be at least 3, got {}",
                self.ellipse_samples
            )));
        }
        if self.hyperbola_samples < 2 {
            return Err(ConicError::InvalidConfig(format!(
                "hyperbola_samples must be at least 2, got {}",
                self.hyperbola_samples
            )));
        }
        Ok(())
    }
}

/// Axis-aligned visible region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min: Pnt2d,
    pub max: Pnt2d,
}

impl Viewport {
    /// Square viewport centered on `center`.
    pub fn centered(center: Pnt2d, half_extent: f64) -> Self {
        Viewport {
            min: center.translated(-half_extent, -half_extent),
            max: center.translated(half_extent, half_extent),
        }
    }

    pub fn center(&self) -> Pnt2d {
        Pnt2d::from_coords((self.min.x() + self.max.x()) / 2.0, (self.min.y() + self.max.y()) / 2.0)
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    pub fn contains(&self, p: Pnt2d) -> bool {
        p.x() >= self.min.x() && p.x() <= self.max.x() && p.y() >= self.min.y() && p.y() <= self.max.y()
    }
}

/// What a marker stands for; each kind has its own face and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    Center,
    Vertex,
    CoVertex,
    Focus,
    LatusRectum,
}

impl MarkerKind {
    pub fn face(self) -> &'static str {
        match self {
            MarkerKind::Center => "circle",
            MarkerKind::Vertex => "cross",
            MarkerKind::CoVertex => "diamond",
            MarkerKind::Focus => "plus",
            MarkerKind::LatusRectum => "square",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MarkerKind::Center => "green",
            MarkerKind::Vertex => "red",
            MarkerKind::CoVertex => "orange",
            MarkerKind::Focus => "purple",
            MarkerKind::LatusRectum => "blue",
        }
    }

    pub fn size(self) -> u32 {
        match self {
            MarkerKind::LatusRectum => 3,
            _ => 4,
        }
    }
}

/// A labeled point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub label: String,
    pub position: Pnt2d,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuideKind {
    Directrix,
    Asymptote,
}

/// A dashed helper segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub kind: GuideKind,
    pub label: String,
    pub start: Pnt2d,
    pub end: Pnt2d,
}

/// Sampled curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Pnt2d>,
    pub closed: bool,
}

/// Everything a drawing surface needs for one conic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub curves: Vec<Polyline>,
    pub markers: Vec<Marker>,
    pub guides: Vec<Guide>,
    /// Fundamental rectangle, hyperbolas only.
    pub rectangle: Option<[Pnt2d; 4]>,
}

impl Scene {
    /// The board before any equation has been plotted.
    pub fn empty(config: &PlotConfig) -> Self {
        Scene {
            viewport: Viewport::centered(Pnt2d::new(), config.default_half_extent),
            curves: Vec::new(),
            markers: Vec::new(),
            guides: Vec::new(),
            rectangle: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty() && self.markers.is_empty() && self.guides.is_empty()
    }

    pub fn marker(&self, label: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.label == label)
    }

    pub fn guides_of(&self, kind: GuideKind) -> impl Iterator<Item = &Guide> {
        self.guides.iter().filter(move |g| g.kind == kind)
    }
}

/// Builds the scene for a derived conic.
pub fn render(geometry: &ConicGeometry, config: &PlotConfig) -> ConicResult<Scene> {
    config.validate()?;

    let extent = geometry.max_extent();
    let half_extent = if extent > 0.0 {
        extent * config.viewport_padding
    } else {
        config.default_half_extent
    };
    let viewport = Viewport::centered(geometry.center, half_extent);

    let curves = match &geometry.curve {
        Curve::Ellipse(ellipse) => {
            let n = config.ellipse_samples;
            let points = (0..n)
                .map(|i| ellipse.value(2.0 * std::f64::consts::PI * i as f64 / n as f64))
                .collect();
            vec![Polyline { points, closed: true }]
        }
        Curve::Hyperbola(hyperbola) => {
            let n = config.hyperbola_samples;
            let limit = config.hyperbola_parameter_limit;
            [Branch::Positive, Branch::Negative]
                .into_iter()
                .map(|branch| {
                    let points = (0..n)
                        .map(|i| {
                            let t = -limit + 2.0 * limit * i as f64 / (n - 1) as f64;
                            hyperbola.value(t, branch)
                        })
                        .collect();
                    Polyline { points, closed: false }
                })
                .collect()
        }
    };

    let mut markers = Vec::with_capacity(11);
    let mut mark = |kind: MarkerKind, label: String, position: Pnt2d| {
        markers.push(Marker { kind, label, position });
    };
    mark(
        MarkerKind::Center,
        format!(
            "C({}, {})",
            crate::precision::format_exact(geometry.center.x()),
            crate::precision::format_exact(geometry.center.y())
        ),
        geometry.center,
    );
    for (i, p) in geometry.vertices.iter().enumerate() {
        mark(MarkerKind::Vertex, format!("V{}", subscript(i + 1)), *p);
    }
    for (i, p) in geometry.co_vertices.iter().enumerate() {
        mark(MarkerKind::CoVertex, format!("W{}", subscript(i + 1)), *p);
    }
    for (i, p) in geometry.foci.iter().enumerate() {
        mark(MarkerKind::Focus, format!("F{}", subscript(i + 1)), *p);
    }
    for (i, p) in geometry.latus_rectum.points.iter().enumerate() {
        mark(MarkerKind::LatusRectum, format!("LR{}", subscript(i + 1)), *p);
    }

    let mut guides = Vec::new();
    if let Some(directrices) = &geometry.directrices {
        let names = if geometry.orientation.is_horizontal() {
            ["Left Directrix", "Right Directrix"]
        } else {
            ["Bottom Directrix", "Top Directrix"]
        };
        for (line, name) in directrices.lines.iter().zip(names) {
            let (start, end) = line.segment_around(geometry.center, config.guide_half_length);
            guides.push(Guide { kind: GuideKind::Directrix, label: name.to_string(), start, end });
        }
    }

    let mut rectangle = None;
    if let Some(hyp) = &geometry.hyperbola {
        for (line, name) in hyp.asymptotes.iter().zip(["Asymptote (+)", "Asymptote (-)"]) {
            if let Some((start, end)) = line.clipped(viewport.min, viewport.max) {
                guides.push(Guide { kind: GuideKind::Asymptote, label: name.to_string(), start, end });
            }
        }
        rectangle = Some(hyp.fundamental_rectangle.corners());
    }

    tracing::trace!(
        curves = curves.len(),
        markers = markers.len(),
        guides = guides.len(),
        half_extent,
        "built plot scene"
    );

    Ok(Scene { viewport, curves, markers, guides, rectangle })
}

/// Unicode subscript digit for marker labels (1 -> ₁).
fn subscript(n: usize) -> char {
    char::from_u32(0x2080 + (n % 10) as u32).unwrap_or('?')
}
