//! conic: standard-form ellipse and hyperbola geometry.
//!
//! Parses equations such as `(x-3)^2/16 + (y-2)^2/9 = 1` and derives
//! center, vertices, co-vertices, foci, latus rectum, directrices,
//! asymptotes and the fundamental rectangle, ready for display and plotting.

pub mod precision;
pub mod gp;
pub mod equation;
pub mod derive;
pub mod report;
pub mod plot;
pub mod session;

// Re-exports for convenience
pub use equation::{parse, ConicKind, EquationForm, ParseError, ParsedConic};
pub use derive::{derive, ConicGeometry, Curve, HyperbolaFeatures};
pub use report::{Report, ReportEntry, Section};
pub use plot::{render, PlotConfig, Scene};
pub use session::Session;

/// Result type for conic operations
pub type Result<T> = std::result::Result<T, ConicError>;

#[derive(Debug, thiserror::Error)]
pub enum ConicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
