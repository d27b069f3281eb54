//! Full pipeline through `Session`: report text, plot scene and configuration.

use conic::gp::Pnt2d;
use conic::plot::{GuideKind, MarkerKind};
use conic::report::Section;
use conic::{ConicError, PlotConfig, Session};

#[test]
fn test_ellipse_report_values() {
    let mut session = Session::default();
    let report = session.submit("x^2/25+y^2/9=1").unwrap();

    assert_eq!(report.get("Equation Type"), Some("Ellipse (Horizontal)"));
    assert_eq!(report.get("Center (h, k)"), Some("(0, 0)"));
    assert_eq!(report.get("V1"), Some("(-5.00, 0.00)"));
    assert_eq!(report.get("V2"), Some("(5.00, 0.00)"));
    assert_eq!(report.get("F1"), Some("(-4.00, 0.00)"));
    assert_eq!(report.get("F2"), Some("(4.00, 0.00)"));
    assert_eq!(report.get("Distance from center to focus (c)"), Some("4.00"));
    assert_eq!(report.get("Latus Rectum Length"), Some("3.60"));
    assert_eq!(report.get("LR1"), Some("(-4.00, 1.80)"));
    assert_eq!(report.get("LR4"), Some("(4.00, -1.80)"));
    assert_eq!(report.get("Eccentricity"), Some("0.80"));
    assert_eq!(report.get("Major Axis Length"), Some("10.00 (a = 5)"));
    assert_eq!(report.get("General Form"), Some("9x² + 25y² - 225 = 0"));
    assert_eq!(report.section(Section::Asymptotes).count(), 0);
}

#[test]
fn test_hyperbola_report_values() {
    let mut session = Session::default();
    let report = session.submit("(x-1)^2/4-(y+2)^2/9=1").unwrap();

    assert_eq!(report.get("Equation Type"), Some("Hyperbola (Horizontal)"));
    assert_eq!(report.get("Center (h, k)"), Some("(1, -2)"));
    assert_eq!(report.get("Distance from center to focus (c)"), Some("3.61"));
    assert_eq!(report.get("Asymptotes"), Some("y = ±3/2x"));
    assert_eq!(report.get("Slope"), Some("1.50"));
    assert_eq!(report.get("Shifted Form"), Some("y + 2 = ±1.50(x - 1)"));
    assert_eq!(report.get("Top-Right"), Some("(3.00, 1.00)"));
    assert_eq!(report.get("Bottom-Left"), Some("(-1.00, -5.00)"));
    assert_eq!(report.section(Section::FundamentalRectangle).count(), 4);
}

#[test]
fn test_report_display_is_line_per_entry() {
    let mut session = Session::default();
    let report = session.submit("y^2/9-x^2/16=1").unwrap();
    let text = report.to_string();
    assert_eq!(text.lines().count(), report.entries().len());
    assert!(text.starts_with("Equation Type: Hyperbola (Vertical)\n"));
}

#[test]
fn test_ellipse_scene() {
    let mut session = Session::default();
    session.submit("x^2/25+y^2/9=1").unwrap();
    let scene = session.scene();

    assert_eq!(scene.viewport.min, Pnt2d::from_coords(-7.5, -7.5));
    assert_eq!(scene.viewport.max, Pnt2d::from_coords(7.5, 7.5));
    assert_eq!(scene.curves.len(), 1);
    assert!(scene.curves[0].closed);
    assert_eq!(scene.markers.len(), 11);
    assert_eq!(scene.marker("C(0, 0)").map(|m| m.kind), Some(MarkerKind::Center));
    assert_eq!(scene.marker("F₂").map(|m| m.position), Some(Pnt2d::from_coords(4.0, 0.0)));
    assert_eq!(scene.guides_of(GuideKind::Directrix).count(), 2);
    assert_eq!(scene.guides_of(GuideKind::Asymptote).count(), 0);
    assert!(scene.rectangle.is_none());
}

#[test]
fn test_circle_scene_has_no_directrices() {
    let mut session = Session::default();
    let report = session.submit("(x-2)^2/4+(y-2)^2/4=1").unwrap();
    assert_eq!(report.get("Directrices"), Some("none (circle)"));
    assert_eq!(session.scene().guides_of(GuideKind::Directrix).count(), 0);
}

#[test]
fn test_hyperbola_scene() {
    let mut session = Session::default();
    session.submit("(x-1)^2/4-(y+2)^2/9=1").unwrap();
    let scene = session.scene();

    assert_eq!(scene.curves.len(), 2);
    assert!(scene.curves.iter().all(|c| !c.closed));
    assert_eq!(scene.guides_of(GuideKind::Asymptote).count(), 2);
    let rect = scene.rectangle.expect("fundamental rectangle");
    assert!(rect.contains(&Pnt2d::from_coords(3.0, 1.0)));
    assert!(rect.contains(&Pnt2d::from_coords(-1.0, -5.0)));
}

#[test]
fn test_config_from_json_changes_sampling() {
    let config = PlotConfig::from_json(r#"{ "ellipse_samples": 16, "viewport_padding": 2.0 }"#).unwrap();
    assert_eq!(config.hyperbola_samples, PlotConfig::default().hyperbola_samples);

    let mut session = Session::new(config).unwrap();
    session.submit("x^2/25+y^2/9=1").unwrap();
    assert_eq!(session.scene().curves[0].points.len(), 16);
    assert_eq!(session.scene().viewport.max, Pnt2d::from_coords(10.0, 10.0));
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(matches!(
        PlotConfig::from_json(r#"{ "viewport_padding": -1.0 }"#),
        Err(ConicError::InvalidConfig(_))
    ));
    assert!(matches!(PlotConfig::from_json("not json"), Err(ConicError::Serialization(_))));
}

#[test]
fn test_rejected_input_empties_board() {
    let mut session = Session::default();
    session.submit("x^2/25+y^2/9=1").unwrap();
    let err = session.submit("y^2/9+x^2/16=1").unwrap_err();
    assert!(err.to_string().contains("could not parse the equation"));
    assert!(session.report().is_none());
    assert!(session.scene().is_empty());
    assert_eq!(session.scene().viewport.max, Pnt2d::from_coords(10.0, 10.0));
}

#[test]
fn test_scene_serializes_to_json() {
    let mut session = Session::default();
    session.submit("x^2/4-y^2/1=1").unwrap();
    let value = serde_json::to_value(session.scene()).unwrap();
    assert_eq!(value["curves"].as_array().map(|c| c.len()), Some(2));
    assert!(value["rectangle"].is_array());
}
