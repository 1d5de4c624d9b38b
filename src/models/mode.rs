//! Acceleration mode registry.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transfer-function kind applied to mouse input.
///
/// The order of the variants matches the engine's mode enumeration and is
/// the order modes are listed in pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccelMode {
    /// Linear growth of sensitivity with speed, optionally capped
    Classic,
    /// Step from one sensitivity to another at an offset
    Jump,
    /// Exponential approach to a limit
    Natural,
    /// Sigmoid around a midpoint in log space
    Motivity,
    /// Power law of speed
    Power,
    /// User-supplied lookup table
    ArbLookup,
    /// No acceleration
    #[default]
    #[serde(rename = "noaccel")]
    NoAccel,
}

impl AccelMode {
    const ALL: [Self; 7] = [
        Self::Classic,
        Self::Jump,
        Self::Natural,
        Self::Motivity,
        Self::Power,
        Self::ArbLookup,
        Self::NoAccel,
    ];

    /// Returns every registry mode in engine order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Wire name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Jump => "jump",
            Self::Natural => "natural",
            Self::Motivity => "motivity",
            Self::Power => "power",
            Self::ArbLookup => "arb_lookup",
            Self::NoAccel => "noaccel",
        }
    }

    /// Human-readable name shown in the mode picker.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Jump => "Jump",
            Self::Natural => "Natural",
            Self::Motivity => "Motivity",
            Self::Power => "Power",
            Self::ArbLookup => "Lookup Table",
            Self::NoAccel => "Off",
        }
    }
}

impl fmt::Display for AccelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccelMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| {
                mode.as_str().eq_ignore_ascii_case(needle)
                    || mode.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|m| m.as_str()).collect();
                anyhow::anyhow!(
                    "Unknown acceleration mode '{}'. Expected one of: {}",
                    needle,
                    names.join(", ")
                )
            })
    }
}
