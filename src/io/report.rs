//! Plain-text rendering of ranked patterns and report output
//!
//! Each pattern is drawn as its bounding-box grid, one line per row, followed
//! by its count and prevalence. Patterns are separated by a blank line:
//!
//! ```text
//! XX
//! Count: 120
//! Prevalence: 0.012000
//!
//! X
//! XX
//! Count: 80
//! Prevalence: 0.008000
//! ```

use std::path::Path;

use ndarray::Array2;

use crate::analysis::patterns::{PatternEntry, PatternTable};
use crate::analysis::shape::Shape;
use crate::analysis::statistics::RankedPatterns;
use crate::io::configuration::{EMPTY_GLYPH, MARKED_GLYPH, PREVALENCE_PRECISION};
use crate::io::error::{Result, SimulationError};

/// Draw a shape as a rectangular grid, rows separated by newlines
///
/// Every row spans the full bounding box width. An empty shape renders as an
/// empty string.
pub fn render_shape(shape: &Shape) -> String {
    let Some(bounds) = shape.bounding_box() else {
        return String::new();
    };

    let mut marks = Array2::from_elem((bounds.height(), bounds.width()), false);
    for offset in shape.offsets() {
        let row = (offset.y - bounds.min[1]) as usize;
        let col = (offset.x - bounds.min[0]) as usize;
        if let Some(mark) = marks.get_mut((row, col)) {
            *mark = true;
        }
    }

    marks
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&marked| if marked { MARKED_GLYPH } else { EMPTY_GLYPH })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one ranked entry: grid, count line and prevalence line
pub fn format_entry(entry: &PatternEntry, prevalence: f64) -> String {
    let mut block = render_shape(&entry.shape);
    if !block.is_empty() {
        block.push('\n');
    }
    block.push_str(&format!(
        "Count: {}\nPrevalence: {prevalence:.precision$}\n",
        entry.count,
        precision = PREVALENCE_PRECISION
    ));
    block
}

/// Render a ranking, most frequent pattern first
pub fn format_ranked(ranked: &RankedPatterns) -> String {
    ranked
        .entries()
        .iter()
        .map(|entry| format_entry(entry, ranked.prevalence_of(entry)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rank a table and render the full report
pub fn format_report(table: &PatternTable, total_trials: u64) -> String {
    format_ranked(&RankedPatterns::from_table(table, total_trials))
}

/// Write report text to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| SimulationError::FileSystem {
        path: path.to_path_buf(),
        operation: "report write",
        source,
    })
}
