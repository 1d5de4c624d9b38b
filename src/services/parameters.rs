//! Parameter assembly service.
//!
//! Turns the text a user typed into a layout's fields into the argument
//! block the acceleration engine reads. Only active slots are read.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{lut, AccelArgs, AccelMode, Layout, OptionSlot};

/// Raw field text keyed by slot, as entered on the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<OptionSlot, String>,
}

impl FieldValues {
    /// Creates an empty set of field values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text for `slot`, replacing any previous value.
    pub fn set(&mut self, slot: OptionSlot, value: impl Into<String>) {
        self.values.insert(slot, value.into());
    }

    /// Builder form of [`FieldValues::set`].
    #[must_use]
    pub fn with(mut self, slot: OptionSlot, value: impl Into<String>) -> Self {
        self.set(slot, value);
        self
    }

    /// Gets the text entered for `slot`.
    #[must_use]
    pub fn get(&self, slot: OptionSlot) -> Option<&str> {
        self.values.get(&slot).map(String::as_str)
    }

    /// Parses `slot=value` assignments (e.g., from `--set cap=2`).
    ///
    /// # Errors
    ///
    /// Returns an error if an assignment has no `=` or names an unknown slot.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self> {
        let mut values = Self::new();
        for assignment in assignments {
            let assignment = assignment.as_ref();
            let (slot, value) = assignment
                .split_once('=')
                .with_context(|| format!("Expected SLOT=VALUE, got '{assignment}'"))?;
            values.set(slot.parse()?, value.trim());
        }
        Ok(values)
    }
}

/// Service that assembles engine arguments from a layout and field text.
pub struct ParameterService;

impl ParameterService {
    /// Assembles the argument block for `layout`.
    ///
    /// Starts from engine defaults with the layout's mode, then writes the
    /// value of every active slot that has text. Text entered for inactive
    /// slots is ignored. Values are parsed but not range-checked.
    ///
    /// # Errors
    ///
    /// Returns an error if the text of an active slot does not parse.
    pub fn finalize(layout: &Layout, values: &FieldValues) -> Result<AccelArgs> {
        let mode = layout.mode();
        let mut args = AccelArgs::for_mode(mode);

        for (slot, option) in layout.options() {
            let Some(text) = values.get(slot) else {
                continue;
            };

            if !option.is_active() {
                debug!(%slot, %mode, "ignoring value for inactive slot");
                continue;
            }

            Self::apply(&mut args, slot, text)
                .with_context(|| format!("Invalid value for {}", option.display_value()))?;
        }

        Ok(args)
    }

    fn apply(args: &mut AccelArgs, slot: OptionSlot, text: &str) -> Result<()> {
        match slot {
            OptionSlot::GainSwitch => args.legacy = !parse_switch(text)?,
            OptionSlot::Acceleration => *acceleration_field(args) = parse_number(text)?,
            OptionSlot::Scale => args.scale = parse_number(text)?,
            OptionSlot::Cap => args.cap = parse_number(text)?,
            OptionSlot::Weight => args.weight = parse_number(text)?,
            OptionSlot::Offset => args.offset = parse_number(text)?,
            OptionSlot::Limit => args.limit = parse_number(text)?,
            OptionSlot::Exponent => args.exponent = parse_number(text)?,
            OptionSlot::Midpoint => args.midpoint = parse_number(text)?,
            OptionSlot::LutText => args.table.points = lut::parse_lut_text(text)?,
        }
        Ok(())
    }
}

/// The engine field the acceleration slot writes for the args' mode.
fn acceleration_field(args: &mut AccelArgs) -> &mut f64 {
    match args.mode {
        AccelMode::Natural => &mut args.decay_rate,
        AccelMode::Motivity => &mut args.growth_rate,
        AccelMode::Jump => &mut args.smooth,
        AccelMode::Classic
        | AccelMode::Power
        | AccelMode::ArbLookup
        | AccelMode::NoAccel => &mut args.accel_classic,
    }
}

fn parse_number(text: &str) -> Result<f64> {
    let text = text.trim();
    let value: f64 = text
        .parse()
        .with_context(|| format!("'{text}' is not a number"))?;
    if !value.is_finite() {
        anyhow::bail!("'{text}' is not a finite number");
    }
    Ok(value)
}

fn parse_switch(text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => anyhow::bail!("'{other}' is not a switch value (use on/off)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::build_layout;

    fn classic() -> Layout {
        build_layout(AccelMode::Classic).unwrap()
    }

    #[test]
    fn test_finalize_no_values_gives_mode_defaults() {
        let args = ParameterService::finalize(&classic(), &FieldValues::new()).unwrap();
        assert_eq!(args, AccelArgs::for_mode(AccelMode::Classic));
    }

    #[test]
    fn test_finalize_writes_active_slots() {
        let values = FieldValues::new()
            .with(OptionSlot::Acceleration, "0.01")
            .with(OptionSlot::Cap, " 2.5 ")
            .with(OptionSlot::Weight, "0.8")
            .with(OptionSlot::Offset, "3")
            .with(OptionSlot::Exponent, "2")
            .with(OptionSlot::GainSwitch, "off");

        let args = ParameterService::finalize(&classic(), &values).unwrap();
        assert_eq!(args.mode, AccelMode::Classic);
        assert!((args.accel_classic - 0.01).abs() < f64::EPSILON);
        assert!((args.cap - 2.5).abs() < f64::EPSILON);
        assert!((args.weight - 0.8).abs() < f64::EPSILON);
        assert!((args.offset - 3.0).abs() < f64::EPSILON);
        assert!((args.exponent - 2.0).abs() < f64::EPSILON);
        assert!(args.legacy);
    }

    #[test]
    fn test_finalize_ignores_inactive_slots() {
        let values = FieldValues::new()
            .with(OptionSlot::Scale, "9")
            .with(OptionSlot::Limit, "not a number")
            .with(OptionSlot::Midpoint, "7")
            .with(OptionSlot::LutText, "1,1;2,2");

        let args = ParameterService::finalize(&classic(), &values).unwrap();
        assert_eq!(args, AccelArgs::for_mode(AccelMode::Classic));
    }

    #[test]
    fn test_finalize_rejects_bad_active_value() {
        let values = FieldValues::new().with(OptionSlot::Cap, "lots");
        let err = ParameterService::finalize(&classic(), &values).unwrap_err();
        assert!(err.to_string().contains("Invalid value for Cap"));

        let values = FieldValues::new().with(OptionSlot::GainSwitch, "maybe");
        assert!(ParameterService::finalize(&classic(), &values).is_err());

        let values = FieldValues::new().with(OptionSlot::Weight, "NaN");
        assert!(ParameterService::finalize(&classic(), &values).is_err());
    }

    #[test]
    fn test_finalize_does_not_range_check() {
        let values = FieldValues::new().with(OptionSlot::Cap, "-100");
        let args = ParameterService::finalize(&classic(), &values).unwrap();
        assert!((args.cap + 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_assignments() {
        let values = FieldValues::from_assignments(&["cap=2", "gain=on", "lut_text=1,2;3,4"]).unwrap();
        assert_eq!(values.get(OptionSlot::Cap), Some("2"));
        assert_eq!(values.get(OptionSlot::GainSwitch), Some("on"));
        assert_eq!(values.get(OptionSlot::LutText), Some("1,2;3,4"));

        assert!(FieldValues::from_assignments(&["cap"]).is_err());
        assert!(FieldValues::from_assignments(&["sens=2"]).is_err());
    }

    #[test]
    fn test_acceleration_field_follows_mode() {
        let mut args = AccelArgs::for_mode(AccelMode::Natural);
        *acceleration_field(&mut args) = 0.4;
        assert!((args.decay_rate - 0.4).abs() < f64::EPSILON);

        let mut args = AccelArgs::for_mode(AccelMode::Motivity);
        *acceleration_field(&mut args) = 2.0;
        assert!((args.growth_rate - 2.0).abs() < f64::EPSILON);
    }
}
