//! Error types for mesh inspection.

use thiserror::Error;

/// Result type alias for inspection operations.
pub type InspectResult<T> = Result<T, InspectError>;

/// Errors that can occur while inspecting a loaded mesh.
///
/// Both variants are terminal for the part being validated: the
/// caller must convert them into an invalid report rather than
/// proceed to classification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InspectError {
    /// The mesh has no vertices.
    ///
    /// The display text is the exact user-visible string the
    /// surrounding service returns for empty uploads.
    #[error("Invalid or empty 3D model")]
    EmptyMesh,

    /// No mesh-processing backend is available in the runtime
    /// environment.
    ///
    /// Loader collaborators return this when they cannot supply
    /// geometry at all; it must surface as a top-level "validation
    /// unavailable" result with no partial data.
    #[error("3D geometry backend not available for validation")]
    BackendUnavailable,
}
