//! Per-mode option layout.

use crate::models::{AccelMode, OptionLayout, OptionSlot};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The ten option slots of a layout.
///
/// Every field is required, so a mode layout that forgets a slot does not
/// compile, and a serialized layout with a missing slot does not deserialize.
/// Slots that do not apply to a mode are set to [`OptionLayout::inactive`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Gain/legacy toggle
    pub gain_switch: OptionLayout,
    /// Acceleration rate
    pub acceleration: OptionLayout,
    /// Scale
    pub scale: OptionLayout,
    /// Output cap
    pub cap: OptionLayout,
    /// Curve weight
    pub weight: OptionLayout,
    /// Input offset
    pub offset: OptionLayout,
    /// Upper limit
    pub limit: OptionLayout,
    /// Exponent
    pub exponent: OptionLayout,
    /// Midpoint
    pub midpoint: OptionLayout,
    /// Lookup table text
    pub lut_text: OptionLayout,
}

impl LayoutOptions {
    /// Gets the option stored in `slot`.
    #[must_use]
    pub const fn get(&self, slot: OptionSlot) -> &OptionLayout {
        match slot {
            OptionSlot::GainSwitch => &self.gain_switch,
            OptionSlot::Acceleration => &self.acceleration,
            OptionSlot::Scale => &self.scale,
            OptionSlot::Cap => &self.cap,
            OptionSlot::Weight => &self.weight,
            OptionSlot::Offset => &self.offset,
            OptionSlot::Limit => &self.limit,
            OptionSlot::Exponent => &self.exponent,
            OptionSlot::Midpoint => &self.midpoint,
            OptionSlot::LutText => &self.lut_text,
        }
    }
}

/// Complete option layout for one acceleration mode.
///
/// Layouts are built once at startup and read-only afterwards: fields are
/// private and only shared references are handed out to the UI.
///
/// # Validation
///
/// - name must be non-empty
/// - all ten slots are populated (enforced by [`LayoutOptions`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    name: String,
    mode: AccelMode,
    #[serde(flatten)]
    options: LayoutOptions,
}

#[derive(Deserialize)]
struct RawLayout {
    name: String,
    mode: AccelMode,
    #[serde(flatten)]
    options: LayoutOptions,
}

impl TryFrom<RawLayout> for Layout {
    type Error = anyhow::Error;

    fn try_from(raw: RawLayout) -> Result<Self> {
        Self::new(raw.name, raw.mode, raw.options)
    }
}

impl Layout {
    /// Creates a layout with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is blank.
    pub fn new(name: impl Into<String>, mode: AccelMode, options: LayoutOptions) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            anyhow::bail!("Layout name cannot be empty (mode '{mode}')");
        }

        Ok(Self {
            name,
            mode,
            options,
        })
    }

    /// Human-readable mode label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mode this layout configures.
    #[must_use]
    pub const fn mode(&self) -> AccelMode {
        self.mode
    }

    /// Named access to all ten slots.
    #[must_use]
    pub const fn slots(&self) -> &LayoutOptions {
        &self.options
    }

    /// Gets the option for a single slot.
    #[must_use]
    pub const fn option(&self, slot: OptionSlot) -> &OptionLayout {
        self.options.get(slot)
    }

    /// Iterates over all slots in panel order.
    pub fn options(&self) -> impl Iterator<Item = (OptionSlot, &OptionLayout)> {
        OptionSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.options.get(slot)))
    }

    /// Whether `slot` is editable in this layout.
    #[must_use]
    pub const fn is_active(&self, slot: OptionSlot) -> bool {
        self.options.get(slot).is_active()
    }

    /// Slots that downstream consumers may read, in panel order.
    #[must_use]
    pub fn active_slots(&self) -> Vec<OptionSlot> {
        self.options()
            .filter(|(_, option)| option.is_active())
            .map(|(slot, _)| slot)
            .collect()
    }
}
