//! One equation in, one report and scene out.
//!
//! A [`Session`] holds whatever is currently displayed. Each submission
//! clears the previous results before parsing, so a rejected equation leaves
//! nothing stale on screen.

use crate::derive::{derive, ConicGeometry};
use crate::equation::parse;
use crate::plot::{render, PlotConfig, Scene};
use crate::report::Report;
use crate::Result;

/// Currently displayed geometry, report and scene.
#[derive(Debug)]
pub struct Session {
    config: PlotConfig,
    geometry: Option<ConicGeometry>,
    report: Option<Report>,
    scene: Scene,
}

impl Session {
    /// Creates a session with an empty board.
    pub fn new(config: PlotConfig) -> Result<Self> {
        config.validate()?;
        let scene = Scene::empty(&config);
        Ok(Session { config, geometry: None, report: None, scene })
    }

    /// Runs the full pipeline on one user input.
    ///
    /// On failure the previous results are already gone and the board is empty.
    pub fn submit(&mut self, text: &str) -> Result<&Report> {
        self.clear();

        let parsed = parse(text.trim())?;
        let geometry = derive(parsed);
        let report = Report::from_geometry(&geometry);
        let scene = render(&geometry, &self.config)?;

        // Release the empty board before installing the new one.
        drop(std::mem::replace(&mut self.scene, scene));
        self.geometry = Some(geometry);
        Ok(&*self.report.insert(report))
    }

    /// Drops the displayed results and resets the board.
    pub fn clear(&mut self) {
        self.geometry = None;
        self.report = None;
        let previous = std::mem::replace(&mut self.scene, Scene::empty(&self.config));
        drop(previous);
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn geometry(&self) -> Option<&ConicGeometry> {
        self.geometry.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Default for Session {
    fn default() -> Self {
        let config = PlotConfig::default();
        let scene = Scene::empty(&config);
        Session { config, geometry: None, report: None, scene }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConicError;

    #[test]
    fn test_submit_success() {
        let mut session = Session::default();
        let report = session.submit("  x^2/25+y^2/9=1  ").unwrap();
        assert_eq!(report.get("Equation Type"), Some("Ellipse (Horizontal)"));
        assert!(session.geometry().is_some());
        assert!(!session.scene().is_empty());
    }

    #[test]
    fn test_failure_clears_previous() {
        let mut session = Session::default();
        session.submit("x^2/25+y^2/9=1").unwrap();
        let err = session.submit("x^2+y^2=1").unwrap_err();
        assert!(matches!(err, ConicError::Parse(_)));
        assert!(session.geometry().is_none());
        assert!(session.report().is_none());
        assert!(session.scene().is_empty());
    }

    #[test]
    fn test_resubmit_replaces_scene() {
        let mut session = Session::default();
        session.submit("x^2/25+y^2/9=1").unwrap();
        session.submit("(x-1)^2/4-(y+2)^2/9=1").unwrap();
        assert_eq!(session.scene().curves.len(), 2);
        assert_eq!(session.report().unwrap().get("Center (h, k)"), Some("(1, -2)"));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = PlotConfig::new().with_samples(0, 0);
        assert!(Session::new(config).is_err());
    }
}
