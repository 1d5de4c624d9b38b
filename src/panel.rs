//! Plain-text rendering of a mode layout.
//!
//! Renders the option panel the way a host UI would lay it out: one row per
//! slot, editable rows for active slots, and either a disabled placeholder or
//! nothing for inactive ones.

use crate::config::InactiveDisplay;
use crate::models::Layout;
use std::fmt::Write as _;

/// Marker for a disabled row.
const DISABLED: &str = "(disabled)";

/// Renders `layout` as a text panel.
///
/// # Example
///
/// ```
/// use accelpanel::config::InactiveDisplay;
/// use accelpanel::layouts::build_layout;
/// use accelpanel::models::AccelMode;
/// use accelpanel::panel::render_layout;
///
/// let layout = build_layout(AccelMode::Classic).unwrap();
/// let text = render_layout(&layout, InactiveDisplay::Hidden);
/// assert!(text.contains("Acceleration"));
/// ```
pub fn render_layout(layout: &Layout, inactive: InactiveDisplay) -> String {
    let mut output = String::new();

    let title = format!("{} ({})", layout.name(), layout.mode());
    let _ = writeln!(output, "{title}");
    let _ = writeln!(output, "{}", "=".repeat(title.len()));

    let width = layout
        .options()
        .map(|(slot, _)| slot.key().len())
        .max()
        .unwrap_or(0);

    for (slot, option) in layout.options() {
        if option.is_active() {
            let _ = writeln!(
                output,
                "  {:<width$}  {} [ ]",
                slot.key(),
                option.display_value()
            );
        } else if inactive == InactiveDisplay::Placeholder {
            let _ = writeln!(output, "  {:<width$}  {DISABLED}", slot.key());
        }
    }

    output
}
