//! Seed file format: one combination per line, labels joined by `", "`,
//! every line terminated by `\n`. No header, no trailing blank line.
use anyhow::{bail, Context, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::case::CaseLabel;

pub const SEPARATOR: &str = ", ";

/// Renders one combination as a seed line, without the trailing newline.
pub fn render_line<T: Display>(labels: &[T]) -> String {
    labels
        .iter()
        .map(|label| label.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Writes every combination in `combinations` to `path`, one per line, and
/// returns the number of lines written.
///
/// The file is created or truncated. Its parent directory must already exist.
/// A failure partway through leaves the partially written file in place.
pub fn write_combinations<I, T>(path: &Path, combinations: I) -> Result<usize>
where
    I: IntoIterator<Item = Vec<T>>,
    T: Display,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create seed file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut lines = 0;
    for combo in combinations {
        writeln!(writer, "{}", render_line(&combo))
            .with_context(|| format!("Failed to write seed file: {}", path.display()))?;
        lines += 1;
    }
    // Flush explicitly so a late write error is reported instead of dropped.
    writer
        .flush()
        .with_context(|| format!("Failed to write seed file: {}", path.display()))?;
    Ok(lines)
}

/// Parses one seed line back into its labels.
///
/// Rejects empty lines, unknown labels, repeated labels and labels that are
/// out of canonical order.
pub fn parse_line(line: &str) -> Result<Vec<CaseLabel>> {
    if line.is_empty() {
        bail!("Empty seed line");
    }
    let labels = line
        .split(SEPARATOR)
        .map(str::parse)
        .collect::<Result<Vec<CaseLabel>>>()?;

    for pair in labels.windows(2) {
        if pair[0] == pair[1] {
            bail!("Duplicate case label: {}", pair[0]);
        }
        if pair[0] > pair[1] {
            bail!("Case label {} listed after {}", pair[1], pair[0]);
        }
    }
    Ok(labels)
}

/// Reads a seed file written by [`write_combinations`].
pub fn read_combinations(path: &Path) -> Result<Vec<Vec<CaseLabel>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            parse_line(line).with_context(|| format!("Invalid seed on line {}", i + 1))
        })
        .collect()
}
