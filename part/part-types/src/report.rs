//! Validation report returned by the rule engine.

use crate::{PartCategory, PlateSettings};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounding dimensions echoed in a validation report.
///
/// Values are rounded to two decimal places by the rule engine;
/// rule evaluation itself runs on full precision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportDimensions {
    /// Length in mm.
    pub length: f64,
    /// Width in mm.
    pub width: f64,
    /// Height in mm.
    pub height: f64,
}

/// General mesh quality findings, appended to every classified report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshQuality {
    /// Number of vertices in the mesh.
    pub vertex_count: usize,
    /// Number of triangle faces in the mesh.
    pub face_count: usize,
    /// Whether the mesh is a closed, manifold solid.
    pub is_watertight: bool,
    /// Quality issues found (polygon count, manifoldness).
    pub issues: Vec<String>,
}

/// Structured verdict produced by a single validation call.
///
/// Constructed fresh per call and returned whole to the caller; there
/// is no persistence. `errors` are blocking problems (any entry makes
/// the part invalid), `warnings` are non-blocking concerns, and
/// `suggestions` are advisory remediation text — warnings and
/// suggestions never affect [`valid`](Self::valid).
///
/// The one exception is plate mode, where a non-watertight mesh
/// forces `valid = false` even though the plate checks record it as
/// the only error-level finding. This asymmetry with the other
/// categories is long-standing observed behavior and is preserved
/// deliberately.
///
/// Optional fields stay unset on short-circuit reports (rejected
/// input, unavailable geometry backend) and are omitted from the
/// serialized payload.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationReport {
    /// Overall verdict; false if any blocking error was recorded.
    pub valid: bool,

    /// Classified part category; unset when classification was skipped.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub part_type: Option<PartCategory>,

    /// Bounding dimensions, rounded to 2 decimals.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dimensions: Option<ReportDimensions>,

    /// Enclosed volume in cubic mm, rounded to 2 decimals; 0 when the
    /// mesh exposes no positive volume.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub volume: Option<f64>,

    /// Whether the mesh is a closed, manifold solid.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub is_watertight: Option<bool>,

    /// General mesh quality findings.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mesh_quality: Option<MeshQuality>,

    /// Blocking problems, in the order the checks ran.
    pub errors: Vec<String>,

    /// Non-blocking concerns, in the order the checks ran.
    pub warnings: Vec<String>,

    /// Advisory remediation text.
    pub suggestions: Vec<String>,

    /// Set to `true` when the part was validated in plate mode.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tamiya_plate_mode: Option<bool>,

    /// Echo of the plate settings used, in plate mode.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub plate_settings: Option<PlateSettings>,
}

impl ValidationReport {
    /// Create an empty report for the given category, initially valid.
    #[must_use]
    pub fn for_category(category: PartCategory) -> Self {
        Self {
            valid: true,
            part_type: Some(category),
            ..Self::default()
        }
    }

    /// Create a minimal invalid report with a single blocking error.
    ///
    /// Used when the input never reaches classification: empty or
    /// degenerate geometry, or an upstream load failure. No other
    /// fields are populated.
    #[must_use]
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
            ..Self::default()
        }
    }

    /// Create the "validation unavailable" report returned when no
    /// mesh-processing backend exists in the runtime environment.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::rejected("3D geometry backend not available for validation")
    }

    /// Get a one-line human-readable summary of the verdict.
    #[must_use]
    pub fn summary(&self) -> String {
        let part = self
            .part_type
            .as_ref()
            .map_or("unclassified", PartCategory::as_str);

        if self.valid {
            if self.warnings.is_empty() {
                format!("Valid {part} part")
            } else {
                format!("Valid {part} part with {} warning(s)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid {part} part: {} error(s), {} warning(s)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
