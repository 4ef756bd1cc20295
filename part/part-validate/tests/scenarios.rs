//! End-to-end validation scenarios over the public API.

use approx::assert_relative_eq;
use nalgebra::Point3;
use part_inspect::MeshSnapshot;
use part_types::{GeometricSummary, PartCategory, PlateSettings};
use part_validate::PartValidator;

fn watertight(length: f64, width: f64, height: f64) -> GeometricSummary {
    GeometricSummary::new(length, width, height)
        .with_watertight(true)
        .with_counts(2400, 4800)
}

#[test]
fn standard_chassis_passes() {
    let validator = PartValidator::default();
    let report = validator.validate(&watertight(150.0, 95.0, 35.0), None);

    assert_eq!(report.part_type, Some(PartCategory::Chassis));
    assert!(report.valid);
    assert!(
        !report.warnings.iter().any(|w| w.contains("too short") || w.contains("too narrow")),
        "150x95 is standard size, no undersize warnings expected"
    );
    assert!(report.suggestions.iter().any(|s| s.contains("axle holes")));
    assert!(report.mesh_quality.as_ref().is_some_and(|q| q.issues.is_empty()));
}

#[test]
fn solid_wheel_warns_about_missing_bore() {
    let validator = PartValidator::default();
    let report = validator.validate(&watertight(24.5, 24.0, 8.0), None);

    assert_eq!(report.part_type, Some(PartCategory::Wheel));
    assert!(report.valid);
    // 24.5mm is within 2mm of the 24mm standard.
    assert!(!report.warnings.iter().any(|w| w.contains("not standard")));
    // But a fully watertight wheel can't take an axle.
    assert!(report.warnings.iter().any(|w| w.contains("appears solid")));
}

#[test]
fn open_frp_plate_is_rejected() {
    let validator = PartValidator::default();
    let settings = PlateSettings {
        thickness: 1.5,
        screw_hole_diameter: 2.05,
    };
    let summary = GeometricSummary::new(40.0, 40.0, 1.5).with_counts(512, 1020);

    let report = validator.validate(&summary, Some(&settings));

    assert_eq!(report.part_type, Some(PartCategory::Plate));
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("not watertight"));
    // Thickness matches the configured 1.5mm FRP stock.
    assert!(!report.warnings.iter().any(|w| w.contains("does not match")));
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.contains("1.5mm") && s.contains("lightweight FRP")));
    assert_eq!(report.tamiya_plate_mode, Some(true));
    assert_eq!(report.plate_settings, Some(settings));
}

#[test]
fn degenerate_model_never_reaches_classification() {
    let validator = PartValidator::default();
    let report = validator.validate(&GeometricSummary::new(0.0, 10.0, 10.0), None);

    assert!(!report.valid);
    assert_eq!(report.errors, vec!["Invalid or empty 3D model"]);
    assert!(report.part_type.is_none());
    assert!(report.dimensions.is_none());
    assert!(report.volume.is_none());
    assert!(report.mesh_quality.is_none());
}

#[test]
fn validate_mesh_runs_the_full_pipeline() {
    let validator = PartValidator::default();
    let mesh = MeshSnapshot::new(
        Point3::new(-75.0, -47.5, 0.0),
        Point3::new(75.0, 47.5, 35.0),
    )
    .with_counts(2400, 4800)
    .with_volume(182_000.0)
    .with_watertight(true);

    let report = validator.validate_mesh(&mesh, None);

    assert_eq!(report.part_type, Some(PartCategory::Chassis));
    assert!(report.valid);
    let dims = report.dimensions.unwrap();
    assert_relative_eq!(dims.length, 150.0);
    assert_relative_eq!(report.volume.unwrap(), 182_000.0);
}

#[test]
fn validate_mesh_rejects_empty_meshes() {
    let validator = PartValidator::default();
    let mesh = MeshSnapshot::new(Point3::origin(), Point3::origin());

    let report = validator.validate_mesh(&mesh, None);

    assert!(!report.valid);
    assert_eq!(report.errors, vec!["Invalid or empty 3D model"]);
    assert!(report.part_type.is_none());
}

#[test]
fn identical_input_yields_identical_reports() {
    let validator = PartValidator::default();
    let summary = watertight(170.0, 40.0, 10.0);
    let settings = PlateSettings::default();

    assert_eq!(
        validator.validate(&summary, None),
        validator.validate(&summary, None)
    );
    assert_eq!(
        validator.validate(&summary, Some(&settings)),
        validator.validate(&summary, Some(&settings))
    );
}

#[test]
fn chassis_oversize_invariant() {
    let validator = PartValidator::default();
    let oversize = [
        (166.0, 95.0, 35.0),
        (150.0, 106.0, 35.0),
        (150.0, 95.0, 41.0),
        (200.0, 200.0, 45.0),
    ];

    for (l, w, h) in oversize {
        let report = validator.validate(&watertight(l, w, h), None);
        assert!(!report.valid, "({l}, {w}, {h}) must be invalid");
    }

    let within = validator.validate(&watertight(160.0, 100.0, 38.0), None);
    assert_eq!(within.part_type, Some(PartCategory::Chassis));
    assert!(within.valid);
}

#[test]
fn wheel_thickness_invariant() {
    let validator = PartValidator::default();

    // thickness = min extent < 2mm ⟺ error present
    let thin = validator.validate(&watertight(24.0, 24.0, 1.9), None);
    assert!(thin.errors.iter().any(|e| e.contains("too thin")));

    let ok = validator.validate(&watertight(24.0, 24.0, 2.0), None);
    assert!(!ok.errors.iter().any(|e| e.contains("too thin")));
}

#[test]
fn plate_validity_tracks_watertightness_only() {
    let validator = PartValidator::default();
    // Out-of-range planar size and mismatched thickness: warnings
    // galore, but the plate is watertight, so it stays valid.
    let summary = watertight(170.0, 8.0, 5.0);
    let report = validator.validate(&summary, Some(&PlateSettings::default()));

    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.len() >= 3);
}
