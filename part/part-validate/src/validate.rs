//! The rule engine: category checks and report assembly.

use part_inspect::{inspect, InspectError, MeshGeometry};
use part_types::{
    GeometricSummary, MeshQuality, PartCategory, PlateSettings, ReportDimensions,
    ValidationReport,
};
use tracing::debug;

use crate::classify::classify;
use crate::rules::{BodyRules, ChassisRules, MeshQualityRules, PlateRules, RuleSet, WheelRules};

/// Part validator: classifies a geometric summary and applies the
/// per-category rules.
///
/// Validation is a pure computation over the summary: no I/O, no
/// shared state, no panics. A `PartValidator` can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use part_types::GeometricSummary;
/// use part_validate::PartValidator;
///
/// let validator = PartValidator::default();
/// let summary = GeometricSummary::new(150.0, 95.0, 35.0)
///     .with_watertight(true)
///     .with_counts(2400, 4800);
///
/// let report = validator.validate(&summary, None);
/// assert!(report.valid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartValidator {
    rules: RuleSet,
}

impl PartValidator {
    /// Create a validator with the given rule registry.
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Get the rule registry in use.
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify and validate a geometric summary.
    ///
    /// Total over its input domain: any finite dimension triple, any
    /// watertightness flag, any counts produce a well-formed report.
    /// Degenerate summaries (any dimension ≤ 0 or non-finite) are
    /// rejected without classification.
    ///
    /// Supplying `plate_settings` short-circuits classification and
    /// validates the part as an FRP/Carbon plate.
    #[must_use]
    pub fn validate(
        &self,
        summary: &GeometricSummary,
        plate_settings: Option<&PlateSettings>,
    ) -> ValidationReport {
        if summary.is_degenerate() {
            return ValidationReport::rejected("Invalid or empty 3D model");
        }

        let mut report = if let Some(settings) = plate_settings {
            let mut report = ValidationReport::for_category(PartCategory::Plate);
            check_plate(&self.rules.plate, summary, settings, &mut report);
            report.tamiya_plate_mode = Some(true);
            report.plate_settings = Some(settings.clone());
            report
        } else {
            let category = classify(summary.length, summary.width, summary.height);
            let mut report = ValidationReport::for_category(category);
            match category {
                PartCategory::Chassis => check_chassis(&self.rules.chassis, summary, &mut report),
                PartCategory::Wheel => check_wheel(&self.rules.wheel, summary, &mut report),
                PartCategory::Body => check_body(&self.rules.body, summary, &mut report),
                PartCategory::Plate | PartCategory::Accessory => {
                    report.warnings.push(format!(
                        "Part type \"{category}\" - basic validation only"
                    ));
                }
            }
            report
        };

        report.mesh_quality = Some(check_mesh_quality(&self.rules.quality, summary));

        // Round for the report only; the checks above ran on full
        // precision.
        report.dimensions = Some(ReportDimensions {
            length: round2(summary.length),
            width: round2(summary.width),
            height: round2(summary.height),
        });
        report.volume = Some(if summary.volume > 0.0 {
            round2(summary.volume)
        } else {
            0.0
        });
        report.is_watertight = Some(summary.is_watertight);

        // Plate mode forces invalid on a non-watertight mesh even if
        // the errors list were otherwise empty. The other categories
        // treat watertightness as a warning. Asymmetric, but observed
        // behavior downstream consumers rely on.
        report.valid =
            report.errors.is_empty() && (plate_settings.is_none() || summary.is_watertight);

        debug!(
            "validated {} part: {} error(s), {} warning(s)",
            report
                .part_type
                .as_ref()
                .map_or("unclassified", PartCategory::as_str),
            report.errors.len(),
            report.warnings.len()
        );

        report
    }

    /// Inspect a loaded mesh and validate the result.
    ///
    /// Convenience facade for callers holding a mesh straight from
    /// the loader collaborator. Inspection failures become rejected
    /// reports; no error escapes.
    #[must_use]
    pub fn validate_mesh<M: MeshGeometry>(
        &self,
        mesh: &M,
        plate_settings: Option<&PlateSettings>,
    ) -> ValidationReport {
        match inspect(mesh) {
            Ok(summary) => self.validate(&summary, plate_settings),
            Err(error) => report_for_inspect_error(&error),
        }
    }
}

/// Convert an inspection failure into the report the caller must
/// return.
///
/// An empty mesh becomes a minimal rejected report; a missing
/// geometry backend becomes the top-level "validation unavailable"
/// result.
#[must_use]
pub fn report_for_inspect_error(error: &InspectError) -> ValidationReport {
    match error {
        InspectError::BackendUnavailable => ValidationReport::unavailable(),
        InspectError::EmptyMesh => ValidationReport::rejected(error.to_string()),
    }
}

/// Chassis checks: hard dimension limits, undersize warnings,
/// watertightness warning.
fn check_chassis(rules: &ChassisRules, summary: &GeometricSummary, report: &mut ValidationReport) {
    let (max_length, max_width, max_height) = rules.max_dimensions;

    if summary.length > max_length {
        report.errors.push(format!(
            "Length {:.1}mm exceeds maximum {max_length}mm",
            summary.length
        ));
    }
    if summary.width > max_width {
        report.errors.push(format!(
            "Width {:.1}mm exceeds maximum {max_width}mm",
            summary.width
        ));
    }
    if summary.height > max_height {
        report.errors.push(format!(
            "Height {:.1}mm exceeds maximum {max_height}mm",
            summary.height
        ));
    }

    if summary.length < rules.min_length {
        report
            .warnings
            .push("Chassis length might be too short for standard Mini 4WD".to_string());
    }
    if summary.width < rules.min_width {
        report
            .warnings
            .push("Chassis width might be too narrow".to_string());
    }

    if !summary.is_watertight {
        report
            .warnings
            .push("Chassis is not watertight - may cause 3D printing issues".to_string());
        report
            .suggestions
            .push("Fix mesh holes and ensure watertight geometry".to_string());
    }

    report
        .suggestions
        .push("Ensure axle holes are properly positioned".to_string());
    report
        .suggestions
        .push("Add mounting points for body and accessories".to_string());
}

/// Wheel checks: standard diameter match, thickness bounds, axle
/// bore heuristic.
fn check_wheel(rules: &WheelRules, summary: &GeometricSummary, report: &mut ValidationReport) {
    // Wheels are expected to lie flat: the two largest extents form
    // the diameter, the smallest is the thickness.
    let diameter = summary.length.max(summary.width);
    let thickness = summary.min_extent();

    let diameter_ok = rules
        .allowed_diameters
        .iter()
        .any(|standard| (diameter - standard).abs() < rules.diameter_tolerance);

    if !diameter_ok {
        report.warnings.push(format!(
            "Wheel diameter {diameter:.1}mm is not standard Mini 4WD size"
        ));
        let standards = rules
            .allowed_diameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        report.suggestions.push(format!(
            "Consider using standard diameters: [{standards}]mm"
        ));
    }

    if thickness < rules.min_thickness {
        report.errors.push(format!(
            "Wheel thickness {thickness:.1}mm is too thin (minimum {}mm)",
            rules.min_thickness
        ));
    }
    if thickness > rules.max_thickness {
        report.warnings.push(format!(
            "Wheel thickness {thickness:.1}mm might be too thick"
        ));
    }

    // A fully watertight wheel has no axle bore.
    if summary.is_watertight {
        report
            .warnings
            .push("Wheel appears solid - ensure axle hole is present".to_string());
        report.suggestions.push(format!(
            "Create {}mm diameter hole for axle",
            rules.axle_hole_diameter
        ));
    }
}

/// Body shell checks: oversize findings are warnings only.
fn check_body(rules: &BodyRules, summary: &GeometricSummary, report: &mut ValidationReport) {
    let (max_length, max_width, max_height) = rules.max_dimensions;

    if summary.length > max_length {
        report.warnings.push(format!(
            "Body length {:.1}mm might be too long",
            summary.length
        ));
    }
    if summary.width > max_width {
        report.warnings.push(format!(
            "Body width {:.1}mm might be too wide",
            summary.width
        ));
    }
    if summary.height > max_height {
        report.warnings.push(format!(
            "Body height {:.1}mm might be too tall",
            summary.height
        ));
    }

    report.suggestions.push(format!(
        "Ensure minimum {}mm wall thickness for 3D printing",
        rules.min_wall_thickness
    ));
    report
        .suggestions
        .push("Add mounting holes for chassis attachment".to_string());
}

/// Plate checks: watertightness is blocking here, everything else
/// warns or suggests.
fn check_plate(
    rules: &PlateRules,
    summary: &GeometricSummary,
    settings: &PlateSettings,
    report: &mut ValidationReport,
) {
    if !summary.is_watertight {
        report
            .errors
            .push("Plate is not watertight - cannot be reliably manufactured".to_string());
        report
            .suggestions
            .push("Fix mesh holes and ensure watertight geometry".to_string());
    }

    let thickness = summary.min_extent();
    if (thickness - settings.thickness).abs() > rules.thickness_tolerance {
        report.warnings.push(format!(
            "Plate thickness {thickness:.2}mm does not match configured {:.2}mm",
            settings.thickness
        ));
    }

    for (label, extent) in [("length", summary.length), ("width", summary.width)] {
        if extent < rules.min_planar_size || extent > rules.max_planar_size {
            report.warnings.push(format!(
                "Plate {label} {extent:.1}mm is outside the {}-{}mm range",
                rules.min_planar_size, rules.max_planar_size
            ));
        }
    }

    report.suggestions.push(format!(
        "Use {}mm screw holes for standard Tamiya fasteners",
        settings.screw_hole_diameter
    ));

    if (settings.thickness - rules.frp_thickness).abs() < f64::EPSILON {
        report.suggestions.push(format!(
            "{:.1}mm thickness matches lightweight FRP plate stock",
            rules.frp_thickness
        ));
    }
    if (settings.thickness - rules.carbon_thickness).abs() < f64::EPSILON {
        report.suggestions.push(format!(
            "{:.1}mm thickness matches structural Carbon plate stock",
            rules.carbon_thickness
        ));
    }
}

/// Mesh quality pass, run for every classified part.
fn check_mesh_quality(rules: &MeshQualityRules, summary: &GeometricSummary) -> MeshQuality {
    let mut issues = Vec::new();

    if summary.face_count > rules.max_face_count {
        issues.push("Very high polygon count - consider simplifying mesh".to_string());
    }
    if summary.face_count < rules.min_face_count {
        issues.push("Very low polygon count - mesh might be too simple".to_string());
    }
    if !summary.is_watertight {
        issues.push("Mesh has holes or non-manifold geometry".to_string());
    }

    MeshQuality {
        vertex_count: summary.vertex_count,
        face_count: summary.face_count,
        is_watertight: summary.is_watertight,
        issues,
    }
}

/// Round to two decimal places for report output.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
