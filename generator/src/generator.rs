use anyhow::Result;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::case::CaseLabel;
use crate::combinations::{non_empty_combinations, non_empty_subset_count};
use crate::output::write_combinations;
use crate::paths::combinations_file_path;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Seed file that was written.
    pub path: PathBuf,
    /// Number of case labels combined.
    pub cases: usize,
    /// Number of lines (combinations) written.
    pub lines: usize,
}

/// Writes every non-empty combination of the eight case labels to
/// `output/combinations.txt`.
///
/// `output/` must already exist: the generator never creates it, and a missing
/// directory is reported as a not-found error.
pub fn generate_combinations() -> Result<GenerationSummary> {
    generate_combinations_to(&CaseLabel::ALL, &combinations_file_path())
}

/// Writes every non-empty combination of `items` to `path`, shortest first and
/// lexicographic within each length.
pub fn generate_combinations_to<T: Display>(items: &[T], path: &Path) -> Result<GenerationSummary> {
    let lines = write_combinations(path, non_empty_combinations(items))?;
    if let Some(expected) = u32::try_from(items.len()).ok().and_then(non_empty_subset_count) {
        debug_assert_eq!(lines as u64, expected);
    }
    Ok(GenerationSummary {
        path: path.to_path_buf(),
        cases: items.len(),
        lines,
    })
}
