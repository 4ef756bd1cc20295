//! Normalized geometric summary of a loaded mesh.

/// Geometry extracted from a loaded mesh by the inspector.
///
/// This is an immutable value: the rule engine reads it, never
/// mutates it. Dimensions are bounding-box extents per axis
/// (`max_bound - min_bound`) in the mesh's native axis order, in
/// millimeters.
///
/// # Invariant
///
/// Dimensions produced by the inspector are always non-negative. A
/// summary with any dimension of zero (or less, if constructed by
/// hand) is degenerate and is rejected by the rule engine before
/// classification; see [`is_degenerate`](Self::is_degenerate).
///
/// # Example
///
/// ```
/// use part_types::GeometricSummary;
///
/// let wheel = GeometricSummary::new(24.5, 24.0, 8.0)
///     .with_watertight(true);
///
/// assert!((wheel.min_extent() - 8.0).abs() < 1e-10);
/// assert!((wheel.max_extent() - 24.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricSummary {
    /// Bounding extent along the mesh's first axis, in mm.
    pub length: f64,
    /// Bounding extent along the mesh's second axis, in mm.
    pub width: f64,
    /// Bounding extent along the mesh's third axis, in mm.
    pub height: f64,
    /// Enclosed volume in cubic mm; 0.0 when the mesh exposes none
    /// or is non-manifold.
    pub volume: f64,
    /// Whether the mesh is a closed, manifold solid.
    pub is_watertight: bool,
    /// Number of vertices in the mesh.
    pub vertex_count: usize,
    /// Number of triangle faces in the mesh.
    pub face_count: usize,
}

impl GeometricSummary {
    /// Create a summary with the given dimensions and no other data.
    #[must_use]
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            volume: 0.0,
            is_watertight: false,
            vertex_count: 0,
            face_count: 0,
        }
    }

    /// Set the enclosed volume.
    #[must_use]
    pub const fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Set the watertightness flag.
    #[must_use]
    pub const fn with_watertight(mut self, watertight: bool) -> Self {
        self.is_watertight = watertight;
        self
    }

    /// Set vertex and face counts.
    #[must_use]
    pub const fn with_counts(mut self, vertices: usize, faces: usize) -> Self {
        self.vertex_count = vertices;
        self.face_count = faces;
        self
    }

    /// Get the shortest dimension (wheel/plate thickness).
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        self.length.min(self.width).min(self.height)
    }

    /// Get the longest dimension.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.length.max(self.width).max(self.height)
    }

    /// Check whether this summary is degenerate (any dimension ≤ 0,
    /// or not finite).
    ///
    /// Degenerate summaries are never classified; the rule engine
    /// turns them into a rejected report.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.length > 0.0 && self.width > 0.0 && self.height > 0.0)
            || !self.length.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        let summary = GeometricSummary::new(150.0, 95.0, 35.0);
        assert!((summary.min_extent() - 35.0).abs() < f64::EPSILON);
        assert!((summary.max_extent() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builders() {
        let summary = GeometricSummary::new(10.0, 10.0, 10.0)
            .with_volume(1000.0)
            .with_watertight(true)
            .with_counts(8, 12);

        assert!((summary.volume - 1000.0).abs() < f64::EPSILON);
        assert!(summary.is_watertight);
        assert_eq!(summary.vertex_count, 8);
        assert_eq!(summary.face_count, 12);
    }

    #[test]
    fn degenerate_zero_dimension() {
        assert!(GeometricSummary::new(0.0, 10.0, 10.0).is_degenerate());
        assert!(GeometricSummary::new(10.0, 0.0, 10.0).is_degenerate());
        assert!(GeometricSummary::new(10.0, 10.0, 0.0).is_degenerate());
        assert!(GeometricSummary::new(-1.0, 10.0, 10.0).is_degenerate());
    }

    #[test]
    fn degenerate_non_finite() {
        assert!(GeometricSummary::new(f64::NAN, 10.0, 10.0).is_degenerate());
        assert!(GeometricSummary::new(f64::INFINITY, 10.0, 10.0).is_degenerate());
    }

    #[test]
    fn positive_dimensions_not_degenerate() {
        assert!(!GeometricSummary::new(0.1, 0.1, 0.1).is_degenerate());
    }
}
