//! The seam to the external mesh-loader collaborator.

use nalgebra::Point3;

/// Already-computed geometry exposed by a loaded mesh.
///
/// This trait defines the minimal read-only interface the inspector
/// needs, allowing it to work with whatever mesh representation the
/// loading library produces. Implementations must return properties
/// the loader has already materialized; the inspector never triggers
/// recomputation.
pub trait MeshGeometry {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of triangle faces.
    fn face_count(&self) -> usize;

    /// Get the axis-aligned bounding box as `(min, max)` corners.
    fn bounds(&self) -> (Point3<f64>, Point3<f64>);

    /// Get the enclosed volume in cubic mm.
    ///
    /// Returns `None` when the mesh does not expose a volume (open
    /// or non-manifold geometry).
    fn volume(&self) -> Option<f64>;

    /// Check whether the mesh is a closed, manifold solid.
    fn is_watertight(&self) -> bool;
}

/// A plain-data [`MeshGeometry`] implementation.
///
/// Useful in tests and for callers whose loader hands over raw
/// numbers rather than a live mesh object.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use part_inspect::{MeshGeometry, MeshSnapshot};
///
/// let snapshot = MeshSnapshot::new(
///     Point3::new(-12.0, -12.0, 0.0),
///     Point3::new(12.5, 12.0, 8.0),
/// )
/// .with_counts(512, 1020)
/// .with_volume(2100.0)
/// .with_watertight(true);
///
/// assert_eq!(snapshot.vertex_count(), 512);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSnapshot {
    min: Point3<f64>,
    max: Point3<f64>,
    vertex_count: usize,
    face_count: usize,
    volume: Option<f64>,
    is_watertight: bool,
}

impl MeshSnapshot {
    /// Create a snapshot from bounding-box corners.
    ///
    /// Counts default to zero, volume to `None`, watertightness to
    /// `false`.
    #[must_use]
    pub const fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min,
            max,
            vertex_count: 0,
            face_count: 0,
            volume: None,
            is_watertight: false,
        }
    }

    /// Set vertex and face counts.
    #[must_use]
    pub const fn with_counts(mut self, vertices: usize, faces: usize) -> Self {
        self.vertex_count = vertices;
        self.face_count = faces;
        self
    }

    /// Set the enclosed volume.
    #[must_use]
    pub const fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Set the watertightness flag.
    #[must_use]
    pub const fn with_watertight(mut self, watertight: bool) -> Self {
        self.is_watertight = watertight;
        self
    }
}

impl MeshGeometry for MeshSnapshot {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn face_count(&self) -> usize {
        self.face_count
    }

    fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        (self.min, self.max)
    }

    fn volume(&self) -> Option<f64> {
        self.volume
    }

    fn is_watertight(&self) -> bool {
        self.is_watertight
    }
}
