//! ASCII circuit diagram for the interactive shell.
//!
//! ```text
//! Zi — \/ — R1 — L1 — Zo
//!      C1
//! ```
//!
//! Series components sit on the top row; shunt components show `\/` on the
//! top row with their label underneath.

use crate::circuit::ComponentListing;

const TOP_SEPARATOR: &str = " — ";
const BOTTOM_SEPARATOR: &str = "   ";
const SHUNT_MARK: &str = "\\/";

/// Render the two diagram rows for a circuit listing.
pub fn render_rows(listing: &[ComponentListing]) -> (String, String) {
    let mut top = vec!["Zi".to_string()];
    let mut bottom = vec![String::new()];

    for entry in listing {
        let label = entry.label();
        if entry.placement.is_shunt() {
            top.push(SHUNT_MARK.to_string());
            bottom.push(label);
        } else {
            top.push(label);
            bottom.push(String::new());
        }
    }

    top.push("Zo".to_string());
    bottom.push(String::new());

    // Keep each column the same width on both rows so labels line up.
    for (t, b) in top.iter_mut().zip(bottom.iter_mut()) {
        let width = t.chars().count().max(b.chars().count());
        *t = format!("{:<width$}", t, width = width);
        *b = format!("{:<width$}", b, width = width);
    }

    let top = top.join(TOP_SEPARATOR).trim_end().to_string();
    let bottom = bottom.join(BOTTOM_SEPARATOR).trim_end().to_string();
    (top, bottom)
}

/// Render the full circuit printout: diagram followed by component data.
pub fn render(listing: &[ComponentListing]) -> String {
    let (top, bottom) = render_rows(listing);
    let mut out = String::new();
    out.push_str("Circuit Diagram:\n");
    out.push_str(&top);
    out.push('\n');
    out.push_str(&bottom);
    out.push_str("\n\nComponent Data:\n");
    for entry in listing {
        out.push_str(&entry.summary);
        out.push('\n');
    }
    out
}
