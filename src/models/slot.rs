//! Names of the option slots shared by every layout.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One potential curve parameter on the configuration panel.
///
/// The slot set is the same for every mode; only activation and labels differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSlot {
    /// Gain/legacy toggle
    GainSwitch,
    /// Acceleration rate
    Acceleration,
    /// Scale
    Scale,
    /// Output cap
    Cap,
    /// Weight applied to the curve
    Weight,
    /// Input offset
    Offset,
    /// Upper limit
    Limit,
    /// Exponent
    Exponent,
    /// Midpoint
    Midpoint,
    /// Lookup table points as text
    LutText,
}

impl OptionSlot {
    /// All slots in panel order.
    pub const ALL: [Self; 10] = [
        Self::GainSwitch,
        Self::Acceleration,
        Self::Scale,
        Self::Cap,
        Self::Weight,
        Self::Offset,
        Self::Limit,
        Self::Exponent,
        Self::Midpoint,
        Self::LutText,
    ];

    /// Snake-case key used in JSON and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::GainSwitch => "gain_switch",
            Self::Acceleration => "acceleration",
            Self::Scale => "scale",
            Self::Cap => "cap",
            Self::Weight => "weight",
            Self::Offset => "offset",
            Self::Limit => "limit",
            Self::Exponent => "exponent",
            Self::Midpoint => "midpoint",
            Self::LutText => "lut_text",
        }
    }
}

impl fmt::Display for OptionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OptionSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "gain" => return Ok(Self::GainSwitch),
            "lut" => return Ok(Self::LutText),
            _ => {}
        }

        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.key() == normalized)
            .ok_or_else(|| anyhow::anyhow!("Unknown option slot '{}'", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_slots_unique_keys() {
        let mut keys: Vec<&str> = OptionSlot::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cap".parse::<OptionSlot>().unwrap(), OptionSlot::Cap);
        assert_eq!("gain-switch".parse::<OptionSlot>().unwrap(), OptionSlot::GainSwitch);
        assert_eq!("gain".parse::<OptionSlot>().unwrap(), OptionSlot::GainSwitch);
        assert_eq!("LUT".parse::<OptionSlot>().unwrap(), OptionSlot::LutText);
        assert!("sensitivity".parse::<OptionSlot>().is_err());
    }

    #[test]
    fn test_serde_key_matches() {
        for slot in OptionSlot::ALL {
            assert_eq!(serde_json::to_string(&slot).unwrap(), format!("\"{}\"", slot.key()));
        }
    }
}
