//! Core value types for Mini 4WD part validation.
//!
//! This crate provides the foundational types shared by the mesh
//! inspector and the rule engine:
//!
//! - [`PartCategory`] - The closed set of recognized part categories
//! - [`GeometricSummary`] - Normalized geometry extracted from a loaded mesh
//! - [`PlateSettings`] - Caller-supplied FRP/Carbon plate configuration
//! - [`ValidationReport`] - The structured verdict returned to the caller
//!
//! # Units
//!
//! All dimensions are millimeters, volumes are cubic millimeters.
//! Dimensions follow the mesh's native axis order as
//! `(length, width, height)`; no re-orientation is performed.
//!
//! # Serialization
//!
//! With the `serde` feature enabled, [`ValidationReport`] serializes
//! to the exact payload shape consumed by the surrounding service:
//! lowercase category names, optional fields omitted when absent.
//!
//! # Example
//!
//! ```
//! use part_types::{GeometricSummary, PartCategory};
//!
//! let summary = GeometricSummary::new(150.0, 95.0, 35.0)
//!     .with_volume(12000.0)
//!     .with_watertight(true)
//!     .with_counts(2400, 4800);
//!
//! assert!(!summary.is_degenerate());
//! assert!((summary.max_extent() - 150.0).abs() < 1e-10);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod category;
mod plate;
mod report;
mod summary;

pub use category::PartCategory;
pub use plate::PlateSettings;
pub use report::{MeshQuality, ReportDimensions, ValidationReport};
pub use summary::GeometricSummary;
