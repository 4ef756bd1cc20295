//! Geometric summary extraction.

use part_types::GeometricSummary;

use crate::error::{InspectError, InspectResult};
use crate::geometry::MeshGeometry;

/// Extract a normalized geometric summary from a loaded mesh.
///
/// Dimensions are the bounding-box extents per axis
/// (`max_bound - min_bound`) in the mesh's native axis order; no
/// re-orientation is performed. A mesh that exposes no volume is
/// summarized with a volume of 0.
///
/// # Errors
///
/// Returns [`InspectError::EmptyMesh`] when the mesh has no vertices.
/// Callers must treat this as a terminal invalid result rather than
/// proceed to classification.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use part_inspect::{inspect, MeshSnapshot};
///
/// let mesh = MeshSnapshot::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(24.5, 24.0, 8.0),
/// )
/// .with_counts(512, 1020)
/// .with_watertight(true);
///
/// let summary = inspect(&mesh).unwrap();
/// assert!((summary.width - 24.0).abs() < 1e-10);
/// assert!((summary.volume - 0.0).abs() < 1e-10); // none exposed
/// ```
pub fn inspect<M: MeshGeometry>(mesh: &M) -> InspectResult<GeometricSummary> {
    if mesh.vertex_count() == 0 {
        return Err(InspectError::EmptyMesh);
    }

    let (min, max) = mesh.bounds();

    Ok(GeometricSummary {
        length: max.x - min.x,
        width: max.y - min.y,
        height: max.z - min.z,
        volume: mesh.volume().unwrap_or(0.0),
        is_watertight: mesh.is_watertight(),
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MeshSnapshot;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn inspect_extracts_dimensions() {
        let mesh = MeshSnapshot::new(
            Point3::new(-75.0, -47.5, 0.0),
            Point3::new(75.0, 47.5, 35.0),
        )
        .with_counts(2400, 4800)
        .with_volume(182_000.0)
        .with_watertight(true);

        let summary = inspect(&mesh).unwrap();
        assert_relative_eq!(summary.length, 150.0);
        assert_relative_eq!(summary.width, 95.0);
        assert_relative_eq!(summary.height, 35.0);
        assert_relative_eq!(summary.volume, 182_000.0);
        assert!(summary.is_watertight);
        assert_eq!(summary.vertex_count, 2400);
        assert_eq!(summary.face_count, 4800);
    }

    #[test]
    fn inspect_empty_mesh_fails() {
        let mesh = MeshSnapshot::new(Point3::origin(), Point3::origin());
        assert_eq!(inspect(&mesh), Err(InspectError::EmptyMesh));
    }

    #[test]
    fn inspect_missing_volume_is_zero() {
        let mesh =
            MeshSnapshot::new(Point3::origin(), Point3::new(10.0, 10.0, 10.0)).with_counts(8, 12);

        let summary = inspect(&mesh).unwrap();
        assert_relative_eq!(summary.volume, 0.0);
        assert!(!summary.is_watertight);
    }

    #[test]
    fn inspect_is_a_pure_read() {
        let mesh = MeshSnapshot::new(Point3::origin(), Point3::new(1.0, 2.0, 3.0))
            .with_counts(8, 12)
            .with_volume(6.0);

        let first = inspect(&mesh).unwrap();
        let second = inspect(&mesh).unwrap();
        assert_eq!(first, second);
    }
}
