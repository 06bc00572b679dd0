//! Error types for plate generation and rendering.
//!
//! Generators and the renderer return these as plain values. Only
//! [`crate::studio::PlateStudio`] turns them into fallback plates.

use thiserror::Error;

/// Failures while computing a plate's geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// No generator is registered under this slug
    #[error("unknown pattern: {slug}")]
    UnknownPattern { slug: String },

    /// Size or detail outside the accepted range
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// The pattern cannot be built from otherwise valid parameters
    #[error("degenerate {pattern}: {reason}")]
    Degenerate { pattern: &'static str, reason: String },
}

/// Failures while turning geometry into a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Geometry holds a NaN or infinite coordinate
    #[error("non-finite coordinate in {element}")]
    NonFiniteCoordinate { element: String },

    /// Canvas dimensions leave nothing to draw on
    #[error("invalid canvas {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}

/// Any failure on the request path.
///
/// ## Rust Lesson #3: `#[from]` and the ? Operator
///
/// `#[from]` writes `impl From<GenerationError> for PlateError` for us.
/// That is what lets `?` inside a function returning
/// `Result<_, PlateError>` accept a `Result<_, GenerationError>`: the
/// error is converted on the way out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlateError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
