//! Feeding and breeding reports with JSON and CSV export.

mod breeding;
mod feeding;

pub use breeding::*;
pub use feeding::*;

/// Escape a string for CSV output.
pub(crate) fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
