//! Part category enumeration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A recognized Mini 4WD part category.
///
/// Each category owns its own rule set in the rule engine. The set is
/// closed: anything that doesn't match a more specific category is an
/// [`Accessory`](Self::Accessory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PartCategory {
    /// Main frame of the car.
    Chassis,
    /// Wheel, expected roughly circular with a standard diameter.
    Wheel,
    /// Body shell mounted on the chassis.
    Body,
    /// Flat FRP/Carbon reinforcement plate.
    Plate,
    /// Unclassified part; receives basic validation only.
    Accessory,
}

impl PartCategory {
    /// Get the lowercase name used in validation reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chassis => "chassis",
            Self::Wheel => "wheel",
            Self::Body => "body",
            Self::Plate => "plate",
            Self::Accessory => "accessory",
        }
    }
}

impl std::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_as_str() {
        assert_eq!(PartCategory::Chassis.as_str(), "chassis");
        assert_eq!(PartCategory::Wheel.as_str(), "wheel");
        assert_eq!(PartCategory::Body.as_str(), "body");
        assert_eq!(PartCategory::Plate.as_str(), "plate");
        assert_eq!(PartCategory::Accessory.as_str(), "accessory");
    }

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", PartCategory::Wheel), "wheel");
    }
}
