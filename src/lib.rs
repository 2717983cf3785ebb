//! Scrape dump splitter.
//!
//! Takes a dump file where single-line JSON records and multi-line HTML
//! documents are interleaved, and splits it in one pass:
//!   - each JSON record into its own `json/json_<n>.json` file, written
//!     the moment it is seen;
//!   - each HTML document accumulated into a unit, all units written at
//!     the end as `html/html_<m>.txt` batches of up to 100, separated by
//!     a `====HTML====` line.

pub mod classify;
pub mod splitter;
pub mod writer;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

pub use splitter::{Splitter, Unit};
pub use writer::{OutputLayout, BATCH_SIZE, UNIT_SEPARATOR};

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SplitCounts {
    /// JSON lines recognized (every one consumes a file index).
    pub json_units: usize,
    /// JSON files that actually landed on disk.
    pub json_files: usize,
    /// JSON writes that failed and were skipped.
    pub json_write_failures: usize,
    /// Bracket-classified lines that serde_json rejected. Diagnostic
    /// only; such lines are still written as JSON files.
    pub json_parse_failures: usize,
    /// HTML units recovered.
    pub html_units: usize,
    /// HTML batch files written.
    pub html_files: usize,
}

impl SplitCounts {
    pub fn print_summary(&self, output_dir: &Path) {
        println!();
        println!("Done:");
        println!(
            "  json files: {} (in {})",
            self.json_files,
            output_dir.join("json").display()
        );
        println!(
            "  html files: {} (in {})",
            self.html_files,
            output_dir.join("html").display()
        );
        if self.json_write_failures > 0 {
            println!("  json writes skipped: {}", self.json_write_failures);
        }
        if self.json_parse_failures > 0 {
            println!(
                "  json lines failing strict parse: {}",
                self.json_parse_failures
            );
        }
    }
}

/// Run the whole split: read `input` line by line, write JSON records as
/// they appear, batch HTML units at the end.
pub fn run_split(input: &Path, output_dir: &Path) -> Result<SplitCounts> {
    let layout = OutputLayout::prepare(output_dir)?;
    let file =
        File::open(input).with_context(|| format!("cannot open input file {}", input.display()))?;

    let mut reader = BufReader::new(file);
    let mut splitter = Splitter::new();
    let mut counts = SplitCounts::default();
    let mut html_units: Vec<String> = Vec::new();
    let mut pending: Vec<Unit> = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .with_context(|| format!("cannot read {}", input.display()))?;
        if n == 0 {
            break;
        }
        // Strip the delimiter only; a CR from a CRLF file stays on the
        // line, same as the raw dump.
        if line.ends_with('\n') {
            line.pop();
        }
        splitter.push_line(&line, &mut pending);
        handle_units(&mut pending, &layout, &mut counts, &mut html_units);
    }
    splitter.finish(&mut pending);
    handle_units(&mut pending, &layout, &mut counts, &mut html_units);

    println!();
    println!("Parse complete:");
    println!("  json units: {}", counts.json_units);
    println!("  html units: {}", counts.html_units);
    println!();

    counts.html_files = writer::write_html_batches(&layout, &html_units)?;
    Ok(counts)
}

fn handle_units(
    pending: &mut Vec<Unit>,
    layout: &OutputLayout,
    counts: &mut SplitCounts,
    html_units: &mut Vec<String>,
) {
    for unit in pending.drain(..) {
        match unit {
            Unit::Json(record) => {
                if serde_json::from_str::<serde_json::Value>(&record).is_err() {
                    debug!(index = counts.json_units, "json line failed strict parse");
                    counts.json_parse_failures += 1;
                }
                if writer::write_json_record(layout, counts.json_units, &record) {
                    counts.json_files += 1;
                } else {
                    counts.json_write_failures += 1;
                }
                counts.json_units += 1;
            }
            Unit::Html(text) => {
                counts.html_units += 1;
                html_units.push(text);
            }
        }
    }
}
