//! Lookup table points and their text form.

use crate::constants::ARB_LUT_CAPACITY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single (input, output) point of an arbitrary lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LutPoint {
    /// Input speed
    pub x: f32,
    /// Sensitivity or velocity at `x`
    pub y: f32,
}

/// Lookup table arguments sent to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableArgs {
    /// Whether points map speed to velocity (true) or to sensitivity (false)
    pub velocity: bool,
    /// Table points, at most [`ARB_LUT_CAPACITY`]
    pub points: Vec<LutPoint>,
}

impl Default for TableArgs {
    fn default() -> Self {
        Self {
            velocity: true,
            points: Vec::new(),
        }
    }
}

/// Parses lookup table text of the form `x,y;x,y;...`.
///
/// Whitespace around numbers is ignored and a trailing `;` is allowed.
///
/// # Errors
///
/// Returns an error if:
/// - the text contains no points
/// - a point is not exactly two comma-separated numbers
/// - a coordinate is not a finite number
/// - there are more than [`ARB_LUT_CAPACITY`] points
pub fn parse_lut_text(text: &str) -> Result<Vec<LutPoint>> {
    let mut points = Vec::new();

    for (index, entry) in text.split(';').enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let mut parts = entry.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            anyhow::bail!("Lookup table point {} '{entry}' must be 'x,y'", index + 1);
        };

        let x = parse_coordinate(x).with_context(|| format!("Lookup table point {}", index + 1))?;
        let y = parse_coordinate(y).with_context(|| format!("Lookup table point {}", index + 1))?;
        points.push(LutPoint { x, y });
    }

    if points.is_empty() {
        anyhow::bail!("Lookup table text contains no points");
    }

    if points.len() > ARB_LUT_CAPACITY {
        anyhow::bail!(
            "Lookup table has {} points, maximum is {}",
            points.len(),
            ARB_LUT_CAPACITY
        );
    }

    Ok(points)
}

fn parse_coordinate(raw: &str) -> Result<f32> {
    let raw = raw.trim();
    let value: f32 = raw
        .parse()
        .with_context(|| format!("'{raw}' is not a number"))?;
    if !value.is_finite() {
        anyhow::bail!("'{raw}' is not a finite number");
    }
    Ok(value)
}
