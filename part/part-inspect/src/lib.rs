//! Mesh inspection for part validation.
//!
//! This crate wraps the external mesh-loader collaborator behind the
//! [`MeshGeometry`] trait and extracts a normalized
//! [`GeometricSummary`](part_types::GeometricSummary) from a loaded
//! mesh: bounding-box dimensions, volume, watertightness, and
//! vertex/face counts.
//!
//! Inspection is a pure read of the mesh's already-computed
//! properties. No volume or watertightness recomputation happens
//! here; that work belongs to the mesh-loading library.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use part_inspect::{inspect, MeshSnapshot};
//!
//! // Geometry handed over by the mesh loader
//! let mesh = MeshSnapshot::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(150.0, 95.0, 35.0),
//! )
//! .with_counts(2400, 4800)
//! .with_watertight(true);
//!
//! let summary = inspect(&mesh).unwrap();
//! assert!((summary.length - 150.0).abs() < 1e-10);
//! assert!(summary.is_watertight);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod geometry;
mod inspect;

pub use error::{InspectError, InspectResult};
pub use geometry::{MeshGeometry, MeshSnapshot};
pub use inspect::inspect;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
