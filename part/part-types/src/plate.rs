//! FRP/Carbon plate settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caller-supplied configuration for flat FRP/Carbon plates.
///
/// Supplying these settings short-circuits part classification: the
/// part is validated as a [`Plate`](crate::PartCategory::Plate)
/// regardless of its geometry.
///
/// Defaults match standard Tamiya hardware: 1.5 mm plate thickness
/// and 2.05 mm screw holes.
///
/// # Example
///
/// ```
/// use part_types::PlateSettings;
///
/// let settings = PlateSettings::default();
/// assert!((settings.thickness - 1.5).abs() < 1e-10);
///
/// let carbon = PlateSettings::default().with_thickness(3.0);
/// assert!((carbon.thickness - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlateSettings {
    /// Target plate thickness in mm.
    pub thickness: f64,
    /// Screw hole diameter in mm.
    pub screw_hole_diameter: f64,
}

impl Default for PlateSettings {
    fn default() -> Self {
        Self {
            thickness: 1.5,
            screw_hole_diameter: 2.05,
        }
    }
}

impl PlateSettings {
    /// Set the target plate thickness.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the screw hole diameter.
    #[must_use]
    pub const fn with_screw_hole_diameter(mut self, diameter: f64) -> Self {
        self.screw_hole_diameter = diameter;
        self
    }
}
