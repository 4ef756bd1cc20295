//! Static rule registry: per-category validation parameters.
//!
//! The fixed Tamiya bounds live here as one immutable record per part
//! category, constructed once and handed to the validator, rather
//! than as literals scattered through the checks. This keeps the
//! tables testable category by category.

/// Chassis validation parameters.
///
/// Dimension limits are hard errors; the undersize thresholds only
/// warn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChassisRules {
    /// Maximum `(length, width, height)` in mm. Exceeding any axis is
    /// a blocking error.
    pub max_dimensions: (f64, f64, f64),
    /// Length below this warns that the chassis may be too short.
    pub min_length: f64,
    /// Width below this warns that the chassis may be too narrow.
    pub min_width: f64,
}

impl Default for ChassisRules {
    fn default() -> Self {
        Self {
            max_dimensions: (165.0, 105.0, 40.0),
            min_length: 140.0,
            min_width: 90.0,
        }
    }
}

/// Wheel validation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelRules {
    /// Standard Mini 4WD wheel diameters in mm.
    pub allowed_diameters: Vec<f64>,
    /// Absolute tolerance when matching a standard diameter
    /// (`|diameter - standard| < tolerance`).
    pub diameter_tolerance: f64,
    /// Minimum wheel thickness in mm; thinner is a blocking error.
    pub min_thickness: f64,
    /// Maximum wheel thickness in mm; thicker only warns.
    pub max_thickness: f64,
    /// Axle hole diameter in mm, used in remediation text.
    pub axle_hole_diameter: f64,
}

impl Default for WheelRules {
    fn default() -> Self {
        Self {
            allowed_diameters: vec![24.0, 30.0],
            diameter_tolerance: 2.0,
            min_thickness: 2.0,
            max_thickness: 15.0,
            axle_hole_diameter: 2.0,
        }
    }
}

/// Body shell validation parameters.
///
/// Body dimension checks never block; every finding is a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRules {
    /// Maximum `(length, width, height)` in mm; exceeding warns.
    pub max_dimensions: (f64, f64, f64),
    /// Minimum printable wall thickness in mm, used in remediation
    /// text.
    pub min_wall_thickness: f64,
}

impl Default for BodyRules {
    fn default() -> Self {
        Self {
            max_dimensions: (165.0, 105.0, 50.0),
            min_wall_thickness: 0.8,
        }
    }
}

/// FRP/Carbon plate validation parameters.
///
/// Plate mode is the one category where watertightness is a blocking
/// error: a non-watertight plate forces `valid = false` even though
/// other categories treat it as a warning. Observed behavior,
/// preserved deliberately.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateRules {
    /// Absolute tolerance between measured and configured thickness.
    pub thickness_tolerance: f64,
    /// Minimum plate length/width in mm; smaller warns.
    pub min_planar_size: f64,
    /// Maximum plate length/width in mm; larger warns.
    pub max_planar_size: f64,
    /// Thickness of lightweight FRP plate stock in mm.
    pub frp_thickness: f64,
    /// Thickness of structural Carbon plate stock in mm.
    pub carbon_thickness: f64,
}

impl Default for PlateRules {
    fn default() -> Self {
        Self {
            thickness_tolerance: 0.2,
            min_planar_size: 10.0,
            max_planar_size: 160.0,
            frp_thickness: 1.5,
            carbon_thickness: 3.0,
        }
    }
}

/// Mesh quality thresholds, applied to every part regardless of
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshQualityRules {
    /// Face counts above this are flagged as very high.
    pub max_face_count: usize,
    /// Face counts below this are flagged as very low.
    pub min_face_count: usize,
}

impl Default for MeshQualityRules {
    fn default() -> Self {
        Self {
            max_face_count: 100_000,
            min_face_count: 10,
        }
    }
}

/// The complete rule registry: one parameters record per category.
///
/// # Example
///
/// ```
/// use part_validate::RuleSet;
///
/// let rules = RuleSet::tamiya_default();
/// assert!((rules.chassis.max_dimensions.0 - 165.0).abs() < 1e-10);
/// assert!((rules.wheel.diameter_tolerance - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    /// Chassis rules.
    pub chassis: ChassisRules,
    /// Wheel rules.
    pub wheel: WheelRules,
    /// Body shell rules.
    pub body: BodyRules,
    /// FRP/Carbon plate rules.
    pub plate: PlateRules,
    /// Category-independent mesh quality thresholds.
    pub quality: MeshQualityRules,
}

impl RuleSet {
    /// The official Tamiya Mini 4WD regulation bounds.
    ///
    /// Same as [`Default`]; the name documents where the numbers come
    /// from.
    #[must_use]
    pub fn tamiya_default() -> Self {
        Self::default()
    }

    /// Replace the chassis rules.
    #[must_use]
    pub fn with_chassis(mut self, chassis: ChassisRules) -> Self {
        self.chassis = chassis;
        self
    }

    /// Replace the wheel rules.
    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelRules) -> Self {
        self.wheel = wheel;
        self
    }

    /// Replace the plate rules.
    #[must_use]
    pub fn with_plate(mut self, plate: PlateRules) -> Self {
        self.plate = plate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tamiya_defaults() {
        let rules = RuleSet::tamiya_default();

        assert!((rules.chassis.max_dimensions.0 - 165.0).abs() < f64::EPSILON);
        assert!((rules.chassis.max_dimensions.1 - 105.0).abs() < f64::EPSILON);
        assert!((rules.chassis.max_dimensions.2 - 40.0).abs() < f64::EPSILON);

        assert_eq!(rules.wheel.allowed_diameters, vec![24.0, 30.0]);
        assert!((rules.wheel.min_thickness - 2.0).abs() < f64::EPSILON);
        assert!((rules.wheel.max_thickness - 15.0).abs() < f64::EPSILON);

        assert!((rules.body.max_dimensions.2 - 50.0).abs() < f64::EPSILON);

        assert!((rules.plate.thickness_tolerance - 0.2).abs() < f64::EPSILON);
        assert!((rules.plate.min_planar_size - 10.0).abs() < f64::EPSILON);
        assert!((rules.plate.max_planar_size - 160.0).abs() < f64::EPSILON);

        assert_eq!(rules.quality.max_face_count, 100_000);
        assert_eq!(rules.quality.min_face_count, 10);
    }

    #[test]
    fn builder_replaces_category_rules() {
        let rules = RuleSet::tamiya_default().with_chassis(ChassisRules {
            max_dimensions: (170.0, 110.0, 45.0),
            ..ChassisRules::default()
        });

        assert!((rules.chassis.max_dimensions.0 - 170.0).abs() < f64::EPSILON);
        // Other categories untouched
        assert!((rules.body.max_dimensions.0 - 165.0).abs() < f64::EPSILON);
    }
}
