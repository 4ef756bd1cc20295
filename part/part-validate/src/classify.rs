//! Dimension-based part classification.

use part_types::PartCategory;
use tracing::debug;

/// Classify a part from its bounding dimensions.
///
/// A fixed decision list evaluated top to bottom; the first matching
/// rule wins, so the ordering is load-bearing:
///
/// 1. `length > 100 && width > 80` → chassis
/// 2. both planar extents `< 35` → wheel
/// 3. `height < 20` and either planar extent `> 50` → body
/// 4. `height > 30` → body
/// 5. anything else → accessory
///
/// This is a heuristic, not a geometric proof: two different shapes
/// can land in the same bucket (a large flat body-shaped part also
/// satisfies the chassis rule, for example). That false-classification
/// risk is accepted; downstream consumers depend on the current
/// bucketing, so neither the thresholds nor the order may change
/// silently.
///
/// # Example
///
/// ```
/// use part_types::PartCategory;
/// use part_validate::classify;
///
/// assert_eq!(classify(150.0, 95.0, 35.0), PartCategory::Chassis);
/// assert_eq!(classify(24.5, 24.0, 8.0), PartCategory::Wheel);
/// assert_eq!(classify(20.0, 20.0, 20.0), PartCategory::Accessory);
/// ```
#[must_use]
pub fn classify(length: f64, width: f64, height: f64) -> PartCategory {
    let category = if length > 100.0 && width > 80.0 {
        PartCategory::Chassis
    } else if length.min(width) < 35.0 && length.max(width) < 35.0 {
        PartCategory::Wheel
    } else if height < 20.0 && (length > 50.0 || width > 50.0) {
        PartCategory::Body
    } else if height > 30.0 {
        PartCategory::Body
    } else {
        PartCategory::Accessory
    };

    debug!(
        "classified {:.1} x {:.1} x {:.1} mm part as {}",
        length, width, height, category
    );

    category
}
