//! Human-readable listing of every notation with a live example.
//!
//! The examples are rendered from the main palette's `rose` color with the
//! real formatter, so the table can never drift from actual output.

use super::{format_color, FormatConfig, Notation};
use crate::palette::{Role, MAIN};

/// One row of the format table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatExample {
    /// Notation name, with ` --plain` appended for the undecorated row.
    pub label: String,
    pub example: String,
}

/// Returns one example per notation, plus a `--plain` row for notations
/// that have a wrapper.
pub fn format_examples() -> Vec<FormatExample> {
    let rose = MAIN.palette.get(Role::Rose);
    let mut rows = Vec::with_capacity(Notation::ALL.len() * 2);

    for notation in Notation::ALL {
        let config = FormatConfig::new(notation);
        rows.push(FormatExample {
            label: notation.name().to_string(),
            example: format_color(rose, &config),
        });
        if notation.has_wrapper() {
            rows.push(FormatExample {
                label: format!("{} --plain", notation.name()),
                example: format_color(rose, &config.plain(true)),
            });
        }
    }

    rows
}

/// Renders the examples as an indented two-column table.
pub fn formats_table() -> String {
    format_examples()
        .into_iter()
        .map(|row| format!("    {:<23} {}\n", row.label, row.example))
        .collect()
}
