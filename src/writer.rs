use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// HTML units per batch file.
pub const BATCH_SIZE: usize = 100;

/// Separator line between units inside one batch file.
pub const UNIT_SEPARATOR: &str = "====HTML====";

/// The json/ and html/ subdirectories under the output root.
pub struct OutputLayout {
    pub json_dir: PathBuf,
    pub html_dir: PathBuf,
}

impl OutputLayout {
    /// Create the output root and both subdirectories. Pre-existing
    /// directories are not an error.
    pub fn prepare(root: &Path) -> Result<Self> {
        let json_dir = root.join("json");
        let html_dir = root.join("html");
        fs::create_dir_all(&json_dir)
            .with_context(|| format!("cannot create {}", json_dir.display()))?;
        fs::create_dir_all(&html_dir)
            .with_context(|| format!("cannot create {}", html_dir.display()))?;
        Ok(OutputLayout { json_dir, html_dir })
    }

    pub fn json_path(&self, index: usize) -> PathBuf {
        self.json_dir.join(format!("json_{index}.json"))
    }

    pub fn html_path(&self, index: usize) -> PathBuf {
        self.html_dir.join(format!("html_{index}.txt"))
    }
}

/// Write one JSON record to its own numbered file, newline-terminated.
/// A failure is reported and swallowed so one bad write cannot stop the
/// pass; returns whether the file landed. The index is consumed either
/// way.
pub fn write_json_record(layout: &OutputLayout, index: usize, line: &str) -> bool {
    let path = layout.json_path(index);
    match fs::write(&path, format!("{line}\n")) {
        Ok(()) => {
            println!("Wrote {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("Failed to write {}: {}", path.display(), e);
            false
        }
    }
}

/// Write all HTML units in encounter order, BATCH_SIZE units per file,
/// separator line before every unit except the first in its file. Any
/// failure here aborts the run. Returns the number of batch files
/// written.
pub fn write_html_batches(layout: &OutputLayout, units: &[String]) -> Result<usize> {
    let mut files = 0;
    for (index, batch) in units.chunks(BATCH_SIZE).enumerate() {
        let path = layout.html_path(index);
        let mut content = String::new();
        for (i, unit) in batch.iter().enumerate() {
            if i > 0 {
                content.push_str(UNIT_SEPARATOR);
                content.push('\n');
            }
            content.push_str(unit);
            content.push('\n');
        }
        fs::write(&path, content).with_context(|| format!("cannot write {}", path.display()))?;
        println!("Wrote {} ({} units)", path.display(), batch.len());
        files += 1;
    }
    Ok(files)
}
