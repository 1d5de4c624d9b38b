//! Default labels shared by every mode layout.
//!
//! A mode that activates one of these slots shows the label verbatim.

/// Gain/legacy switch label.
pub const GAIN: &str = "Gain";

/// Acceleration rate label.
pub const ACCELERATION: &str = "Acceleration";

/// Cap label.
pub const CAP: &str = "Cap";

/// Weight label.
pub const WEIGHT: &str = "Weight";

/// Offset label.
pub const OFFSET: &str = "Offset";

/// Exponent label.
pub const EXPONENT: &str = "Exponent";
