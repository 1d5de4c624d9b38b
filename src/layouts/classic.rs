//! Classic mode layout.

use super::defaults::{ACCELERATION, CAP, EXPONENT, GAIN, OFFSET, WEIGHT};
use crate::models::{AccelMode, Layout, LayoutOptions, OptionLayout};
use anyhow::Result;

/// Display name of the classic layout.
pub const NAME: &str = "Classic";

/// Builds the classic layout.
///
/// Classic exposes the gain switch, acceleration, cap, weight, offset and
/// exponent; scale, limit, midpoint and the lookup table are disabled.
pub fn layout() -> Result<Layout> {
    Layout::new(
        NAME,
        AccelMode::Classic,
        LayoutOptions {
            gain_switch: OptionLayout::active(GAIN),
            acceleration: OptionLayout::active(ACCELERATION),
            scale: OptionLayout::inactive(),
            cap: OptionLayout::active(CAP),
            weight: OptionLayout::active(WEIGHT),
            offset: OptionLayout::active(OFFSET),
            limit: OptionLayout::inactive(),
            exponent: OptionLayout::active(EXPONENT),
            midpoint: OptionLayout::inactive(),
            lut_text: OptionLayout::inactive(),
        },
    )
}
