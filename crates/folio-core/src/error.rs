use thiserror::Error;

/// Errors surfaced by the scene core.
///
/// Generation itself cannot fail; the only runtime input that can be
/// malformed is the surface size reported by the host.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f64),
}
