//! Argument block consumed by the acceleration engine.

use crate::models::{AccelMode, TableArgs};
use serde::{Deserialize, Serialize};

/// Curve parameters for one axis, as read by the engine.
///
/// Defaults match the engine's built-in defaults. A panel only writes the
/// fields behind its active slots; everything else keeps these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelArgs {
    /// Curve kind
    pub mode: AccelMode,
    /// Apply the curve to sensitivity instead of gain
    pub legacy: bool,
    /// Input offset
    pub offset: f64,
    /// Output cap
    pub cap: f64,
    /// Classic acceleration rate
    pub accel_classic: f64,
    /// Natural decay rate
    pub decay_rate: f64,
    /// Motivity growth rate
    pub growth_rate: f64,
    /// Motivity maximum
    pub motivity: f64,
    /// Power curve exponent base
    pub power: f64,
    /// Scale
    pub scale: f64,
    /// Curve weight
    pub weight: f64,
    /// Exponent
    pub exponent: f64,
    /// Upper limit
    pub limit: f64,
    /// Midpoint
    pub midpoint: f64,
    /// Jump smoothing
    pub smooth: f64,
    /// Arbitrary lookup table
    pub table: TableArgs,
}

impl Default for AccelArgs {
    fn default() -> Self {
        Self {
            mode: AccelMode::NoAccel,
            legacy: false,
            offset: 0.0,
            cap: 1.5,
            accel_classic: 0.005,
            decay_rate: 0.1,
            growth_rate: 1.0,
            motivity: 1.5,
            power: 2.0,
            scale: 1.0,
            weight: 1.0,
            exponent: 0.05,
            limit: 1.5,
            midpoint: 5.0,
            smooth: 0.5,
            table: TableArgs::default(),
        }
    }
}

impl AccelArgs {
    /// Creates default arguments for `mode`.
    #[must_use]
    pub fn for_mode(mode: AccelMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults() {
        let args = AccelArgs::default();
        assert_eq!(args.mode, AccelMode::NoAccel);
        assert!(!args.legacy);
        assert!((args.cap - 1.5).abs() < f64::EPSILON);
        assert!((args.accel_classic - 0.005).abs() < f64::EPSILON);
        assert!((args.exponent - 0.05).abs() < f64::EPSILON);
        assert!((args.midpoint - 5.0).abs() < f64::EPSILON);
        assert!(args.table.velocity);
        assert!(args.table.points.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let args: AccelArgs = serde_json::from_str(r#"{"mode":"classic","cap":2.0}"#).unwrap();
        assert_eq!(args.mode, AccelMode::Classic);
        assert!((args.cap - 2.0).abs() < f64::EPSILON);
        assert!((args.weight - 1.0).abs() < f64::EPSILON);
    }
}
