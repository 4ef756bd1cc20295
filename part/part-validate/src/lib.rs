//! Part classification and rule engine for Mini 4WD compatibility.
//!
//! This crate decides what a part is and whether it can race: given a
//! [`GeometricSummary`](part_types::GeometricSummary) produced by
//! [`part_inspect`], it classifies the part into a category (chassis,
//! wheel, body, plate, accessory), applies that category's
//! dimensional and manufacturability rules, and returns a structured
//! [`ValidationReport`](part_types::ValidationReport).
//!
//! # Features
//!
//! - **Classification**: a fixed first-match decision list over the
//!   bounding dimensions ([`classify`])
//! - **Rule registry**: the Tamiya bounds as one immutable record per
//!   category ([`RuleSet`])
//! - **Validation**: total, panic-free report assembly
//!   ([`PartValidator`])
//!
//! # Example
//!
//! ```
//! use part_types::{GeometricSummary, PartCategory, PlateSettings};
//! use part_validate::PartValidator;
//!
//! let validator = PartValidator::default();
//!
//! // A chassis-sized part, closed and printable
//! let summary = GeometricSummary::new(150.0, 95.0, 35.0)
//!     .with_watertight(true)
//!     .with_counts(2400, 4800);
//!
//! let report = validator.validate(&summary, None);
//! assert_eq!(report.part_type, Some(PartCategory::Chassis));
//! assert!(report.valid);
//!
//! // The same call in plate mode skips classification entirely
//! let plate = validator.validate(&summary, Some(&PlateSettings::default()));
//! assert_eq!(plate.part_type, Some(PartCategory::Plate));
//! ```
//!
//! # Severity model
//!
//! `errors` block (`valid = false`), `warnings` and `suggestions`
//! never do — with one preserved asymmetry: in plate mode a
//! non-watertight mesh forces the part invalid. See
//! [`ValidationReport`](part_types::ValidationReport).

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod rules;
mod validate;

pub use classify::classify;
pub use rules::{
    BodyRules, ChassisRules, MeshQualityRules, PlateRules, RuleSet, WheelRules,
};
pub use validate::{report_for_inspect_error, PartValidator};

// Re-export the shared value types for convenience
pub use part_types::{
    GeometricSummary, MeshQuality, PartCategory, PlateSettings, ReportDimensions,
    ValidationReport,
};
